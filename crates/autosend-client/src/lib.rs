//! # autosend-client
//!
//! Core HTTP transport for the Autosend API.
//!
//! This crate provides the foundational HTTP client with:
//! - Bearer authentication and JSON bodies
//! - A per-attempt timeout (timeouts are reported, never retried)
//! - Automatic retry of 429/5xx responses and network errors with
//!   exponential backoff (1s, 2s, 4s, ...)
//! - A uniform [`ApiResponse`] envelope instead of errors for HTTP failures
//! - Request/response tracing when debug is enabled
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (autosend-api resource clients, autosend-resend adapter)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  AutosendHttpClient                         │
//! │  - Holds API key, base URL + pooled HTTP client             │
//! │  - Typed JSON methods (get_json, post_json, delete_request) │
//! │  - Retry loop, timeout, error-message extraction            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use autosend_client::{AutosendHttpClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), autosend_client::Error> {
//!     let client = AutosendHttpClient::new("as_live_key", ClientConfig::default())?;
//!
//!     let response: autosend_client::ApiResponse<serde_json::Value> =
//!         client.get_json("/contacts/contact-123").await?;
//!
//!     match response.into_result() {
//!         Ok(contact) => println!("{contact}"),
//!         Err(failure) => eprintln!("{} ({:?})", failure.message, failure.status_code),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod retry;

pub use client::AutosendHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, BASE_URL_ENV};
pub use error::{is_retryable_status, Error, ErrorKind, Result};
pub use request::{encode_path_segment, RequestBuilder, RequestMethod};
pub use response::{error_message_from_body, ApiFailure, ApiResponse, TIMEOUT_ERROR, UNKNOWN_ERROR};
pub use retry::{BackoffStrategy, RetryConfig, RetryPolicy};

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.autosend.com/v1";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("autosend-rust/", env!("CARGO_PKG_VERSION"));
