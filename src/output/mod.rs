use crate::{Request, Response, Result};
use std::io::Write;
use std::sync::Once;


/// Sink for the lines the interceptor emits around each call.
pub trait Outputter {
    fn request(&mut self, request: &Request) -> Result<()>;
    fn response(&mut self, response: &Response) -> Result<()>;
}

static INIT_LOGGING: Once = Once::new();

/// Installs the process-wide logger. Idempotent, so any test can call it
/// without setup; lines are timestamped by `env_logger`.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .init();
    });
}

pub fn format_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect()
}

/// Outputter backed by the process-wide log.
pub struct LogOutputter;

impl Outputter for LogOutputter {
    fn request(&mut self, request: &Request) -> Result<()> {
        log::info!(
            "Sending '{method}' request to '{target}'. Headers:\n{headers}",
            method = request.method,
            target = request.target(),
            headers = format_headers(&request.headers),
        );
        Ok(())
    }

    fn response(&mut self, response: &Response) -> Result<()> {
        log::info!(
            "Receiving response {url}. {version} {status}. Headers:\n{headers}Body: {body}",
            url = response.url,
            version = response.version,
            status = response.status,
            headers = format_headers(&response.headers),
            body = response.body,
        );
        Ok(())
    }
}

/// Outputter that writes to any `Write`, used by tests to capture exactly what
/// the interceptor logged. Bodies are written verbatim.
pub struct WriterOutputter<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutputter<W> {
    pub fn new(writer: W) -> WriterOutputter<W> {
        WriterOutputter { writer }
    }
}

impl<W: Write> Outputter for WriterOutputter<W> {
    fn request(&mut self, request: &Request) -> Result<()> {
        let line = format!(
            "{method} {target}\n{headers}\n",
            method = request.method,
            target = request.target(),
            headers = format_headers(&request.headers),
        );
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn response(&mut self, response: &Response) -> Result<()> {
        let line = format!(
            "{version} {status}\n{headers}\n{body}\n",
            version = response.version,
            status = response.status,
            headers = format_headers(&response.headers),
            body = response.body,
        );
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }
}
