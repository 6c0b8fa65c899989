use crate::{Method, Request, Result};
use anyhow::bail;

/// A declarative description of one HTTP operation: a verb plus a path
/// template whose `{name}` segments are filled in from call-site arguments.
/// The catalogs in [`crate::github`] and [`crate::gorest`] are tables of
/// these, all interpreted by [`Endpoint::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(name: &'static str, method: Method, path: &'static str) -> Endpoint {
        Endpoint { name, method, path }
    }

    /// Builds the request for this operation against the given base URL,
    /// substituting every path placeholder. Headers, query parameters, and
    /// the body are attached by the caller afterwards.
    pub fn request(&self, base_url: &str, params: &[(&str, &str)]) -> Result<Request> {
        let path = expand_path(self.path, params)?;
        Ok(Request::new(self.method, join_url(base_url, &path)))
    }
}

/// Substitutes named `{placeholder}` segments. A parameter without a matching
/// placeholder or a placeholder left unsubstituted is an error, so the
/// resulting path never contains literal braces.
pub fn expand_path(template: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut path = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{}}}", name);
        if !path.contains(&placeholder) {
            bail!(
                "Path template '{}' has no placeholder '{}'",
                template,
                placeholder
            );
        }
        path = path.replace(&placeholder, value);
    }
    if path.contains('{') || path.contains('}') {
        bail!(
            "Path template '{}' has unsubstituted placeholders: '{}'",
            template,
            path
        );
    }
    Ok(path)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
