//! # autosend
//!
//! Rust client for the Autosend transactional email API.
//!
//! The API key is redacted in Debug output and is never logged.
//!
//! ## Crates
//!
//! - **autosend-client** - HTTP transport: auth, timeouts, retry with backoff, response envelope
//! - **autosend-api** - Typed Emails and Contacts clients
//! - **autosend-resend** - Resend-compatible adapter for code written against Resend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use autosend::api::{Autosend, EmailAddress, SendEmailOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let autosend = Autosend::new("as_live_key", autosend::ClientConfig::from_env())?;
//!
//!     let response = autosend
//!         .emails()
//!         .send(
//!             &SendEmailOptions::new(
//!                 EmailAddress::new("hello@myapp.com").with_name("My App"),
//!                 EmailAddress::new("user@example.com"),
//!                 "Welcome!",
//!             )
//!             .with_html("<h1>Welcome</h1>"),
//!         )
//!         .await?;
//!
//!     match response.into_result() {
//!         Ok(sent) => println!("queued {}", sent.email_id),
//!         Err(failure) => eprintln!("send failed: {}", failure.message),
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "api")]
pub use autosend_api as api;
#[cfg(feature = "client")]
pub use autosend_client as client;
#[cfg(feature = "resend")]
pub use autosend_resend as resend;

#[cfg(feature = "api")]
pub use autosend_api::Autosend;
#[cfg(feature = "client")]
pub use autosend_client::{ApiResponse, ClientConfig, RetryConfig};
#[cfg(feature = "resend")]
pub use autosend_resend::{Resend, ResendOptions};
