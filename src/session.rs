use crate::http_client::reqwest::ReqwestHttpClient;
use crate::interceptor::LoggingInterceptor;
use crate::output::{self, LogOutputter, Outputter};
use crate::{ClientConfig, HttpClient, Request, Response, Result};

/// The single path every request takes, whether it was assembled from an
/// endpoint descriptor or through the fluent builder: one blocking round trip
/// over the owned transport, wrapped by the logging interceptor.
pub struct Session {
    http: Box<dyn HttpClient>,
    interceptor: LoggingInterceptor,
}

impl Session {
    pub fn new(config: ClientConfig) -> Result<Session> {
        output::init_logging();
        let http = Box::new(ReqwestHttpClient::create(config)?);
        Ok(Session::with_parts(http, Box::new(LogOutputter)))
    }

    pub fn with_parts(http: Box<dyn HttpClient>, outputter: Box<dyn Outputter>) -> Session {
        Session {
            http,
            interceptor: LoggingInterceptor::new(outputter),
        }
    }

    pub fn send(&mut self, request: &Request) -> Result<Response> {
        let http = &*self.http;
        self.interceptor
            .intercept(request, |request| http.execute(request))
    }
}
