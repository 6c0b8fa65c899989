use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::{ClientConfig, Method, Request, Response, Result, Session};

pub const CREATE_USER_POST: Endpoint = Endpoint::new(
    "create_user_post",
    Method::Post,
    "/public/v1/users/{user}/posts",
);

/// Client for the Gorest posts endpoint. Unlike the GitHub operations, the
/// post fields travel as query parameters, not as a body.
pub struct GorestClient {
    session: Session,
    base_url: String,
    token: Option<String>,
}

impl GorestClient {
    pub fn new(config: &Config, client_config: ClientConfig) -> Result<GorestClient> {
        Ok(GorestClient::with_session(
            Session::new(client_config)?,
            &config.gorest_base_url,
            config.gorest_token.clone(),
        ))
    }

    pub fn with_session(
        session: Session,
        base_url: &str,
        token: Option<String>,
    ) -> GorestClient {
        GorestClient {
            session,
            base_url: base_url.to_string(),
            token,
        }
    }

    /// POST /public/v1/users/{user}/posts?title=...&body=...
    pub fn create_user_post(&mut self, user: &str, title: &str, body: &str) -> Result<Response> {
        let request = CREATE_USER_POST
            .request(&self.base_url, &[("user", user)])?
            .with_query("title", title)
            .with_query("body", body);
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
