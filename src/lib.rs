//! # restcheck
//!
//! restcheck is a small synchronous harness for writing HTTP contract checks
//! against REST APIs. A check builds one request, sends it, and asserts on the
//! response; there is no retry logic, no caching, and no concurrency.
//!
//! Requests can be assembled two ways, both feeding the same [`Session`]:
//!
//! * declaratively, through an [`endpoint::Endpoint`] descriptor (verb plus a
//!   path template with `{name}` placeholders) interpreted by one generic
//!   dispatch routine — the [`github::GitHubClient`] and
//!   [`gorest::GorestClient`] operation catalogs are built on this, or
//! * fluently, through the chainable [`RequestBuilder`].
//!
//! Every call passes through a logging interceptor that records the outbound
//! request and the buffered response before handing the response back
//! untouched. Response bodies are buffered in full and must be valid UTF-8.
//!
//! ```no_run
//! use restcheck::{ClientConfig, Config, Session, RequestBuilder};
//!
//! # fn main() -> restcheck::Result<()> {
//! let config = Config::from_env();
//! let mut session = Session::new(ClientConfig::default())?;
//!
//! let response = RequestBuilder::new(&mut session, &config.github_base_url)
//!     .header("Accept", "application/json")
//!     .get("/zen")?;
//!
//! assert_eq!(200, response.status_code);
//! assert!(!response.body.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod endpoint;
pub mod github;
pub mod gorest;
pub mod http_client;
pub mod interceptor;
pub mod model;
pub mod output;
pub mod session;

pub use crate::builder::RequestBuilder;
pub use crate::config::Config;
pub use crate::http_client::{ClientConfig, HttpClient};
pub use crate::model::{Issue, Method, Request, RequestBody, Response};
pub use crate::session::Session;

pub type Result<T> = anyhow::Result<T>;
