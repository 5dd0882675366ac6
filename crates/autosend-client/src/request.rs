//! HTTP request building.

use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Upper-case method name, as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against a path relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) path: String,
    pub(crate) body: Option<serde_json::Value>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Set a JSON body, serializing it up front.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
        self.body = Some(value);
        Ok(self)
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// Percent-encode a value for use as a single path segment.
///
/// Ids come from callers; encoding keeps `/`, `?` and `#` from changing the
/// endpoint that gets hit.
#[must_use]
pub fn encode_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
