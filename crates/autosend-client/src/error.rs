//! Error types for autosend-client.
//!
//! HTTP-level failures (4xx/5xx, timeouts, exhausted retries) are not errors
//! here: the transport reports them inside an [`ApiResponse`](crate::ApiResponse).
//! [`Error`] is reserved for conditions the transport cannot express as a
//! response, such as an unserializable body or a bad configuration.

/// Result type alias for autosend-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for autosend-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Returns true if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection or other network-level failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Request body serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ErrorKind {
    /// Returns true if the transport should retry after this error.
    ///
    /// Only network-level failures qualify. Timeouts are terminal, and
    /// configuration or body errors would fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Connection(_))
    }
}

/// Check if an HTTP status code is retryable: 429 or any 5xx and above.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || status >= 500
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_builder() {
            ErrorKind::Config(err.to_string())
        } else {
            ErrorKind::Connection(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
