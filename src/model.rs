use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match *self {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        f.write_str(method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Http09,
    Http10,
    Http11,
    Http2,
    Http3,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = match *self {
            Version::Http09 => "HTTP/0.9",
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Http2 => "HTTP/2.0",
            Version::Http3 => "HTTP/3.0",
        };
        f.write_str(version)
    }
}

/// Body of an outbound request. Raw text is sent verbatim; structured records
/// and key-value maps both serialize through [`RequestBody::json`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Text(String),
    Json(Value),
}

impl RequestBody {
    pub fn text(body: impl Into<String>) -> RequestBody {
        RequestBody::Text(body.into())
    }

    pub fn json<T: Serialize>(value: &T) -> Result<RequestBody> {
        let value =
            serde_json::to_value(value).context("Failed serializing request body to JSON")?;
        Ok(RequestBody::Json(value))
    }
}

/// One outbound request. Constructed once per call and not mutated after the
/// builder-style setters have run.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Request {
        Request {
            method,
            url: url.into(),
            headers: vec![],
            query: vec![],
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Request {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Request {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Request {
        self.body = Some(body);
        self
    }

    /// The request target as it is logged: the URL with any query pairs
    /// appended.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        format!("{}?{}", self.url, query.join("&"))
    }
}

/// A fully buffered response. The body has already been read into memory and
/// decoded as UTF-8 by the transport; the JSON accessors parse it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub version: Version,
    pub url: String,
    pub status_code: u16,
    pub status: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// First header with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field_name, _)| field_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("Response from {} is not valid JSON", self.url))
    }

    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("Failed decoding response from {}", self.url))
    }

    /// Dot-separated field-path lookup into the JSON body. Numeric segments
    /// index into arrays. Returns `Ok(None)` when any segment is missing.
    pub fn json_path(&self, path: &str) -> Result<Option<Value>> {
        let mut current = self.json()?;
        for segment in path.split('.') {
            let next = match &current {
                Value::Object(map) => map.get(segment).cloned(),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index).cloned()),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

/// A tracked item in the target API. Equality is structural, so a decoded
/// issue compares equal to the record it was created from no matter how the
/// source text ordered its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub body: String,
}

impl Issue {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Issue {
        Issue {
            title: title.into(),
            body: body.into(),
        }
    }
}
