use std::env;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GOREST_API_URL: &str = "https://gorest.co.in";

/// Target base URLs and bearer tokens, sourced from the environment so no
/// credential ever appears as a literal at a call site. Absent tokens simply
/// leave the Authorization header off.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_base_url: String,
    pub gorest_base_url: String,
    pub github_token: Option<String>,
    pub gorest_token: Option<String>,
}

impl Config {
    /// Reads `GITHUB_API_URL`, `GOREST_API_URL`, `GITHUB_TOKEN`, and
    /// `GOREST_TOKEN`; the URLs fall back to the public endpoints.
    pub fn from_env() -> Config {
        Config {
            github_base_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| GITHUB_API_URL.to_string()),
            gorest_base_url: env::var("GOREST_API_URL")
                .unwrap_or_else(|_| GOREST_API_URL.to_string()),
            github_token: env::var("GITHUB_TOKEN").ok(),
            gorest_token: env::var("GOREST_TOKEN").ok(),
        }
    }
}
