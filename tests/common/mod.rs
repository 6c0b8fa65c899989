#![allow(dead_code)]

use httpmock::MockServer;
use restcheck::github::GitHubClient;
use restcheck::gorest::GorestClient;
use restcheck::http_client::reqwest::ReqwestHttpClient;
use restcheck::output::WriterOutputter;
use restcheck::{ClientConfig, HttpClient, Session};
use std::io;
use std::io::Write;
use std::str::from_utf8;
use std::sync::{Arc, Mutex};

/// A `Write` handle that can be cloned into the session's outputter and read
/// back after the call, to inspect exactly what the interceptor logged.
#[derive(Clone, Default)]
pub struct SharedWriter(pub Arc<Mutex<String>>);

impl SharedWriter {
    pub fn contents(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let buf = from_utf8(buf).unwrap();
        self.0.lock().unwrap().push_str(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn session() -> Session {
    Session::new(ClientConfig::default()).unwrap()
}

/// A session whose interceptor writes into the returned `SharedWriter`.
pub fn capture_session() -> (Session, SharedWriter) {
    let writer = SharedWriter::default();
    let http = Box::new(ReqwestHttpClient::create(ClientConfig::default()).unwrap());
    let session = Session::with_parts(http, Box::new(WriterOutputter::new(writer.clone())));
    (session, writer)
}

pub fn github_client(server: &MockServer, token: Option<&str>) -> GitHubClient {
    GitHubClient::with_session(session(), &server.base_url(), token.map(str::to_string))
}

pub fn gorest_client(server: &MockServer, token: Option<&str>) -> GorestClient {
    GorestClient::with_session(session(), &server.base_url(), token.map(str::to_string))
}

/// Unique issue title per run, so created records are distinguishable in the
/// logs the way the original randomized titles were.
pub fn unique_title() -> String {
    format!("issue {}", uuid::Uuid::new_v4().simple())
}
