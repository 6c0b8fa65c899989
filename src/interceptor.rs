use crate::output::Outputter;
use crate::{Request, Response, Result};

/// Side-effect-only wrapper around a network call. Logs the outbound request,
/// forwards it exactly once, logs the buffered response, then returns the
/// response untouched; the body the caller sees is the same buffer the log
/// line was built from.
pub struct LoggingInterceptor {
    outputter: Box<dyn Outputter>,
}

impl LoggingInterceptor {
    pub fn new(outputter: Box<dyn Outputter>) -> LoggingInterceptor {
        LoggingInterceptor { outputter }
    }

    pub fn intercept<F>(&mut self, request: &Request, proceed: F) -> Result<Response>
    where
        F: FnOnce(&Request) -> Result<Response>,
    {
        self.outputter.request(request)?;
        let response = proceed(request)?;
        self.outputter.response(&response)?;
        Ok(response)
    }
}
