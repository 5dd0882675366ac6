//! Error types for autosend-resend.
//!
//! Two separate things live here:
//! - [`ResendError`] / [`ErrorName`]: the error half of a
//!   [`ResendResponse`](crate::ResendResponse), shaped like Resend's errors.
//!   Adapter operations report every failure this way.
//! - [`Error`]: construction failures of the [`Resend`](crate::Resend) facade.

use autosend_client::ApiFailure;
use serde::{Deserialize, Serialize};

/// Fallback message when an error carries no text of its own.
pub const UNKNOWN_ERROR: &str = autosend_client::UNKNOWN_ERROR;

/// Resend error names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorName {
    ValidationError,
    MissingApiKey,
    InvalidApiKey,
    NotFound,
    RateLimitExceeded,
    InternalServerError,
    ApplicationError,
    /// An unexpected error caught at the adapter boundary.
    ApiError,
}

impl ErrorName {
    /// The wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorName::ValidationError => "validation_error",
            ErrorName::MissingApiKey => "missing_api_key",
            ErrorName::InvalidApiKey => "invalid_api_key",
            ErrorName::NotFound => "not_found",
            ErrorName::RateLimitExceeded => "rate_limit_exceeded",
            ErrorName::InternalServerError => "internal_server_error",
            ErrorName::ApplicationError => "application_error",
            ErrorName::ApiError => "api_error",
        }
    }

    /// Map an HTTP status to an error name. Total: unlisted statuses are
    /// `application_error`.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorName::ValidationError,
            401 => ErrorName::MissingApiKey,
            403 => ErrorName::InvalidApiKey,
            404 => ErrorName::NotFound,
            429 => ErrorName::RateLimitExceeded,
            500 => ErrorName::InternalServerError,
            _ => ErrorName::ApplicationError,
        }
    }
}

impl std::fmt::Display for ErrorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Resend-shaped error: `{ name, message, statusCode? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{name}: {message}")]
pub struct ResendError {
    pub name: ErrorName,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ResendError {
    /// A validation error raised before any network call.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            name: ErrorName::ValidationError,
            message: message.into(),
            status_code: None,
        }
    }

    /// An unexpected error caught at the adapter boundary.
    pub fn api_error(err: &dyn std::fmt::Display) -> Self {
        let message = err.to_string();
        Self {
            name: ErrorName::ApiError,
            message: if message.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            },
            status_code: None,
        }
    }

    /// Translate a failed native response. A failure without a real HTTP
    /// status is reported as a 500.
    pub fn from_failure(failure: ApiFailure) -> Self {
        let status = failure.http_status().unwrap_or(500);
        map_http_status(status, failure.message)
    }
}

/// Build the Resend error for an HTTP status.
pub fn map_http_status(status: u16, message: impl Into<String>) -> ResendError {
    ResendError {
        name: ErrorName::from_status(status),
        message: message.into(),
        status_code: Some(status),
    }
}

/// Result type alias for facade construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Error constructing the [`Resend`](crate::Resend) facade.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(
        "Missing API key. Pass it to the constructor or set the RESEND_API_KEY environment variable."
    )]
    MissingApiKey,
    #[error("Client error: {0}")]
    Client(String),
}

impl From<autosend_client::Error> for Error {
    fn from(err: autosend_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
