use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::{ClientConfig, Issue, Method, Request, RequestBody, Response, Result, Session};
use serde_json::{Map, Value};

pub const ZEN: Endpoint = Endpoint::new("zen", Method::Get, "/zen");
pub const DEFUNKT: Endpoint = Endpoint::new("defunkt", Method::Get, "/users/defunkt");
pub const LIST_ISSUES: Endpoint =
    Endpoint::new("list_issues", Method::Get, "/repos/{user}/rest/issues");
pub const CREATE_ISSUE: Endpoint =
    Endpoint::new("create_issue", Method::Post, "/repos/{user}/rest/issues");

/// Named operations over the GitHub REST issues endpoints. Each method builds
/// one request from the endpoint catalog, sends it through the session, and
/// returns the buffered response for the caller to assert on.
pub struct GitHubClient {
    session: Session,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &Config, client_config: ClientConfig) -> Result<GitHubClient> {
        Ok(GitHubClient::with_session(
            Session::new(client_config)?,
            &config.github_base_url,
            config.github_token.clone(),
        ))
    }

    pub fn with_session(
        session: Session,
        base_url: &str,
        token: Option<String>,
    ) -> GitHubClient {
        GitHubClient {
            session,
            base_url: base_url.to_string(),
            token,
        }
    }

    /// GET /zen — the healthcheck endpoint, plain-text body.
    pub fn zen(&mut self) -> Result<Response> {
        let request = ZEN.request(&self.base_url, &[])?;
        self.session.send(&request)
    }

    /// GET /users/defunkt — a public profile, used as a non-empty-body probe.
    pub fn defunkt(&mut self) -> Result<Response> {
        let request = DEFUNKT.request(&self.base_url, &[])?;
        self.session.send(&request)
    }

    /// Lists issues without an Authorization header.
    pub fn issues_unauthenticated(&mut self, user: &str) -> Result<Response> {
        let request = LIST_ISSUES.request(&self.base_url, &[("user", user)])?;
        self.session.send(&request)
    }

    /// Lists issues with the configured bearer token.
    pub fn issues(&mut self, user: &str) -> Result<Response> {
        self.issues_with_accept("application/json", user)
    }

    /// Lists issues with an explicit Accept header, for probing how the API
    /// responds to content types it does not serve.
    pub fn issues_with_accept(&mut self, accept: &str, user: &str) -> Result<Response> {
        let request = LIST_ISSUES
            .request(&self.base_url, &[("user", user)])?
            .with_header("Accept", accept);
        let request = self.authorize(request);
        self.session.send(&request)
    }

    /// Creates an issue from a raw JSON text body.
    pub fn create_issue_text(&mut self, user: &str, body: &str) -> Result<Response> {
        self.create(user, RequestBody::text(body))
    }

    /// Creates an issue from a structured record.
    pub fn create_issue(&mut self, user: &str, issue: &Issue) -> Result<Response> {
        self.create(user, RequestBody::json(issue)?)
    }

    /// Creates an issue from an unordered key-value map.
    pub fn create_issue_fields(
        &mut self,
        user: &str,
        fields: &Map<String, Value>,
    ) -> Result<Response> {
        self.create(user, RequestBody::json(fields)?)
    }

    fn create(&mut self, user: &str, body: RequestBody) -> Result<Response> {
        let request = CREATE_ISSUE
            .request(&self.base_url, &[("user", user)])?
            .with_header("Accept", "application/json")
            .with_body(body);
        let request = self.authorize(request);
        self.session.send(&request)
    }

    fn authorize(&self, request: Request) -> Request {
        match &self.token {
            Some(token) => request.with_header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }
}
