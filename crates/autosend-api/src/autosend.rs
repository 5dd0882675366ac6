//! The `Autosend` entry point.

use autosend_client::{AutosendHttpClient, ClientConfig, Result};

use crate::contacts::Contacts;
use crate::emails::Emails;

/// Autosend API client.
///
/// Owns the configuration and hands out the resource clients, which all
/// share one transport.
///
/// # Example
///
/// ```rust,ignore
/// use autosend_api::{Autosend, EmailAddress, SendEmailOptions};
/// use autosend_client::ClientConfig;
///
/// let autosend = Autosend::new("as_live_key", ClientConfig::default())?;
///
/// let options = SendEmailOptions::new(
///     EmailAddress::new("hello@myapp.com").with_name("My App"),
///     EmailAddress::new("user@example.com"),
///     "Welcome!",
/// )
/// .with_html("<h1>Welcome</h1>");
///
/// let response = autosend.emails().send(&options).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Autosend {
    http: AutosendHttpClient,
    emails: Emails,
    contacts: Contacts,
}

impl Autosend {
    /// Create a client. Fails if the API key is blank or the config is invalid.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = AutosendHttpClient::new(api_key, config)?;
        Ok(Self::from_client(http))
    }

    /// Create a client with the default configuration.
    pub fn with_defaults(api_key: impl Into<String>) -> Result<Self> {
        Self::new(api_key, ClientConfig::default())
    }

    /// Create a client from an existing transport.
    pub fn from_client(http: AutosendHttpClient) -> Self {
        Self {
            emails: Emails::new(http.clone()),
            contacts: Contacts::new(http.clone()),
            http,
        }
    }

    /// Email operations.
    pub fn emails(&self) -> &Emails {
        &self.emails
    }

    /// Contact operations.
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// The underlying transport, for endpoints without a typed wrapper.
    pub fn http(&self) -> &AutosendHttpClient {
        &self.http
    }
}
