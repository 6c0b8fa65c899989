use crate::{Request, Response, Result};
use std::time::Duration;


pub mod reqwest;

/// Transport configuration, fixed once per client: TLS verification and a
/// single connect/read timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub ssl_check: bool,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ssl_check: true,
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool, timeout: Duration) -> Self {
        Self { ssl_check, timeout }
    }
}

pub trait HttpClient {
    fn create(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;

    /// Performs exactly one blocking round trip and returns the fully
    /// buffered response. No retries.
    fn execute(&self, request: &Request) -> Result<Response>;
}
