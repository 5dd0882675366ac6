//! The uniform result envelope returned by the transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback message when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Message reported when an attempt exceeds the configured timeout.
pub const TIMEOUT_ERROR: &str = "Request timeout";

/// Outcome of an API call: `{ success, data?, error?, statusCode? }`.
///
/// A successful response always carries `data` and no `error`; a failed one
/// always carries `error` and no `data`. The constructors are the only way to
/// build one, so the two halves never mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status_code: None,
        }
    }

    /// A failed response. `status_code` is 0 when no HTTP status was observed.
    pub fn failure(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            status_code: Some(status_code),
        }
    }

    /// A failed response with no status information at all.
    pub fn failure_without_status(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            status_code: None,
        }
    }

    /// Returns true if the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The response data, present on success.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// The error message, present on failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The HTTP status of a failure. `Some(0)` means a timeout or a network
    /// failure with no response.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Consume the response and return its data, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the data of a successful response, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            status_code: self.status_code,
        }
    }

    /// Split into the data on success or an [`ApiFailure`] otherwise.
    pub fn into_result(self) -> std::result::Result<T, ApiFailure> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiFailure {
                message: self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
                status_code: self.status_code,
            }),
        }
    }
}

/// The failure half of an [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// Human-readable error message.
    pub message: String,
    /// HTTP status, if one was observed.
    pub status_code: Option<u16>,
}

impl ApiFailure {
    /// The status code when it names a real HTTP status (non-zero).
    pub fn http_status(&self) -> Option<u16> {
        self.status_code.filter(|status| *status != 0)
    }
}

/// Extract a human-readable message from a failed response body.
///
/// Prefers a JSON `message` field, then `error` (a string, or an object with
/// its own `message`), then the raw text, then `HTTP <status>` for an empty body.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| match map.get("error") {
                Some(Value::String(s)) => Some(s.as_str()),
                Some(Value::Object(inner)) => inner.get("message").and_then(Value::as_str),
                _ => None,
            });
        if let Some(message) = message {
            return message.to_string();
        }
    }

    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}
