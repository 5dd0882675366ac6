//! # autosend-resend
//!
//! A Resend-compatible client backed by the Autosend API.
//!
//! Code written against Resend's `emails.send` and `contacts.*` keeps its
//! shapes: options use Resend's field names, addresses are plain
//! `"Name <address>"` strings, and every call resolves to a
//! [`ResendResponse`] `{ data, error }` instead of returning `Err`.
//!
//! ## Differences from Resend
//!
//! - `tags`, `attachments`, `headers` and `scheduledAt` are accepted,
//!   logged with `tracing::warn!` and dropped (see [`unsupported_features`])
//! - A send with several `to` addresses becomes one batch request, and
//!   cc/bcc are not carried on that path
//! - Contacts can only be fetched or removed by id
//! - Contacts always report `unsubscribed: false`
//!
//! ## Example
//!
//! ```rust,ignore
//! use autosend_resend::{Resend, ResendOptions, SendEmailOptions};
//!
//! let resend = Resend::new(Some("as_live_key".into()), ResendOptions::default())?;
//!
//! let response = resend
//!     .emails()
//!     .send(
//!         &SendEmailOptions::new("App <app@example.com>", vec!["a@example.com", "b@example.com"], "News")
//!             .with_html("<p>Hello</p>"),
//!     )
//!     .await;
//!
//! if let Some(error) = response.error() {
//!     eprintln!("{} ({:?}): {}", error.name, error.status_code, error.message);
//! }
//! ```

mod contacts;
mod emails;
mod error;
mod resend;
mod transforms;
mod types;

pub use contacts::{ContactSelector, ContactsAdapter};
pub use emails::{unsupported_features, EmailsAdapter, UnsupportedFeature};
pub use error::{map_http_status, Error, ErrorKind, ErrorName, ResendError, Result};
pub use resend::{api_key_from_env, Resend, ResendOptions, API_KEY_ENV};
pub use transforms::{parse_email_address, parse_email_addresses, BulkSendRequest};
pub use types::*;
