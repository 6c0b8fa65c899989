use crate::http_client::{ClientConfig, HttpClient};
use crate::model::Version;
use crate::{Method, Request, RequestBody, Response, Result};
use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;
use std::convert::{TryFrom, TryInto};

pub struct ReqwestHttpClient {
    client: Client,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .context("Failed building the HTTP client")?;

        Ok(ReqwestHttpClient { client })
    }

    fn execute(&self, request: &Request) -> Result<Response> {
        let Request {
            method,
            url,
            headers,
            query,
            body,
        } = request;
        let mut request_builder = self.client.request(method.into(), url);
        request_builder = set_headers(headers, request_builder);
        if !query.is_empty() {
            request_builder = request_builder.query(query);
        }
        if let Some(body) = body {
            request_builder = set_body(body, request_builder);
        }
        let response = request_builder
            .send()
            .with_context(|| format!("Error sending {} request to {}", method, url))?;

        response.try_into()
    }
}

fn set_headers(
    headers: &[(String, String)],
    mut request_builder: RequestBuilder,
) -> RequestBuilder {
    for (key, value) in headers {
        request_builder = request_builder.header(key, value);
    }
    request_builder
}

fn set_body(body: &RequestBody, request_builder: RequestBuilder) -> RequestBuilder {
    match body {
        RequestBody::Text(text) => request_builder.body(text.clone()),
        RequestBody::Json(value) => request_builder.json(value),
    }
}

impl From<&Method> for reqwest::Method {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl From<reqwest::Version> for Version {
    fn from(version: reqwest::Version) -> Self {
        match version {
            reqwest::Version::HTTP_09 => Version::Http09,
            reqwest::Version::HTTP_10 => Version::Http10,
            reqwest::Version::HTTP_2 => Version::Http2,
            reqwest::Version::HTTP_3 => Version::Http3,
            _ => Version::Http11,
        }
    }
}

struct Headers(Vec<(String, String)>);

impl TryFrom<reqwest::blocking::Response> for Response {
    type Error = anyhow::Error;

    fn try_from(response: reqwest::blocking::Response) -> Result<Self> {
        let url = response.url().to_string();
        let version = response.version().into();
        let status_code = response.status().as_u16();
        let status = response.status().to_string();
        let Headers(headers) = response.headers().try_into()?;
        // Buffer the whole body up front; non-UTF-8 bodies are a hard error,
        // there is no fallback encoding.
        let bytes = response
            .bytes()
            .with_context(|| format!("Error reading response body from {}", url))?;
        let body = String::from_utf8(bytes.to_vec())
            .with_context(|| format!("Response body from {} is not valid UTF-8", url))?;
        Ok(Response {
            version,
            url,
            status_code,
            status,
            headers,
            body,
        })
    }
}

impl TryFrom<&HeaderMap> for Headers {
    type Error = anyhow::Error;

    fn try_from(value: &HeaderMap) -> Result<Self> {
        let mut headers = vec![];
        for (header_name, header_value) in value.iter() {
            headers.push((header_name.to_string(), header_value.to_str()?.to_string()))
        }
        Ok(Headers(headers))
    }
}
