//! # autosend-api
//!
//! Typed clients for the Autosend transactional email API.
//!
//! ## Features
//!
//! - **Emails** - Send a single email or a batch in one request
//! - **Contacts** - Create, fetch, delete and upsert-by-email
//! - **One envelope** - Every call resolves to an [`ApiResponse`]; HTTP
//!   failures are data, not errors
//!
//! These clients add no retry or validation of their own: the transport in
//! `autosend-client` does the retrying, and `Err` is only returned for
//! conditions it cannot express as a response.
//!
//! ## Example
//!
//! ```rust,ignore
//! use autosend_api::{Autosend, CreateContactOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), autosend_api::Error> {
//!     let autosend = Autosend::with_defaults("as_live_key")?;
//!
//!     let created = autosend
//!         .contacts()
//!         .create(&CreateContactOptions::new("user@example.com").with_first_name("Ann"))
//!         .await?;
//!
//!     if let Some(contact) = created.data() {
//!         println!("created {}", contact.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod autosend;
mod contacts;
mod emails;
mod types;

pub use autosend::Autosend;
pub use contacts::{Contacts, CONTACTS_PATH, UPSERT_PATH};
pub use emails::{Emails, BULK_PATH, SEND_PATH};
pub use types::*;

pub use autosend_client::{ApiFailure, ApiResponse, ClientConfig, Error, ErrorKind, Result};
