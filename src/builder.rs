use crate::endpoint::join_url;
use crate::{Method, Request, RequestBody, Response, Result, Session};
use serde::Serialize;

/// Chainable request assembly: set the base address, headers, query
/// parameters, and body, then trigger a GET or POST against a path. The
/// finished request goes through the same [`Session::send`] path as the
/// declarative endpoint catalogs.
///
/// ```no_run
/// # use restcheck::{ClientConfig, Issue, RequestBuilder, Session};
/// # fn main() -> restcheck::Result<()> {
/// let mut session = Session::new(ClientConfig::default())?;
/// let response = RequestBuilder::new(&mut session, "https://api.github.com")
///     .header("Accept", "application/json")
///     .bearer("token-from-env")
///     .json(&Issue::new("T", "D"))?
///     .post("/repos/octocat/rest/issues")?;
/// assert_eq!(201, response.status_code);
/// # Ok(())
/// # }
/// ```
pub struct RequestBuilder<'a> {
    session: &'a mut Session,
    base_url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(session: &'a mut Session, base_url: impl Into<String>) -> RequestBuilder<'a> {
        RequestBuilder {
            session,
            base_url: base_url.into(),
            headers: vec![],
            query: vec![],
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        let value = format!("Bearer {}", token);
        self.header("Authorization", &value)
    }

    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, body: &str) -> Self {
        self.body = Some(RequestBody::text(body));
        self
    }

    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self> {
        self.body = Some(RequestBody::json(value)?);
        Ok(self)
    }

    pub fn get(self, path: &str) -> Result<Response> {
        self.send(Method::Get, path)
    }

    pub fn post(self, path: &str) -> Result<Response> {
        self.send(Method::Post, path)
    }

    fn send(self, method: Method, path: &str) -> Result<Response> {
        let request = Request {
            method,
            url: join_url(&self.base_url, path),
            headers: self.headers,
            query: self.query,
            body: self.body,
        };
        self.session.send(&request)
    }
}
