//! The `Resend` entry point.

use std::time::Duration;

use autosend_api::Autosend;
use autosend_client::ClientConfig;

use crate::contacts::ContactsAdapter;
use crate::emails::EmailsAdapter;
use crate::error::{Error, ErrorKind, Result};

/// Environment variable read by [`api_key_from_env`].
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

/// Read the API key from `RESEND_API_KEY`. Blank values count as unset.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Options accepted by [`Resend::new`].
#[derive(Debug, Clone, Default)]
pub struct ResendOptions {
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    pub debug: Option<bool>,
}

impl ResendOptions {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    fn into_config(self) -> ClientConfig {
        let mut builder = ClientConfig::builder();
        if let Some(base_url) = self.base_url {
            builder = builder.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.with_timeout(timeout);
        }
        if let Some(debug) = self.debug {
            builder = builder.with_debug(debug);
        }
        builder.build()
    }
}

/// Drop-in replacement for the Resend client, backed by Autosend.
///
/// # Example
///
/// ```rust,ignore
/// use autosend_resend::{api_key_from_env, Resend, ResendOptions, SendEmailOptions};
///
/// let resend = Resend::new(api_key_from_env(), ResendOptions::default())?;
///
/// let response = resend
///     .emails()
///     .send(&SendEmailOptions::new("App <app@example.com>", "user@example.com", "Hi"))
///     .await;
///
/// match response.into_result() {
///     Ok(sent) => println!("sent {}", sent.id),
///     Err(err) => eprintln!("{err}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resend {
    client: Autosend,
    emails: EmailsAdapter,
    contacts: ContactsAdapter,
}

impl Resend {
    /// Create a client. A missing or blank key is an error.
    pub fn new(api_key: Option<String>, options: ResendOptions) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::new(ErrorKind::MissingApiKey))?;

        let client = Autosend::new(api_key, options.into_config())?;
        Ok(Self {
            emails: EmailsAdapter::new(client.clone()),
            contacts: ContactsAdapter::new(client.clone()),
            client,
        })
    }

    /// Create a client with default options.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(Some(api_key.into()), ResendOptions::default())
    }

    pub fn emails(&self) -> &EmailsAdapter {
        &self.emails
    }

    pub fn contacts(&self) -> &ContactsAdapter {
        &self.contacts
    }

    /// The native Autosend client underneath.
    pub fn autosend(&self) -> &Autosend {
        &self.client
    }
}
