//! Client configuration.

use crate::retry::RetryConfig;
use std::time::Duration;

/// Environment variable consulted by [`ClientConfig::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "AUTOSEND_BASE_URL";

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry: RetryConfig,
    /// User-Agent header value.
    pub user_agent: String,
    /// Log each attempt and response status.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(30_000),
            retry: RetryConfig::default(),
            user_agent: crate::USER_AGENT.to_string(),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Default configuration with the base URL taken from `AUTOSEND_BASE_URL`
    /// when that variable is set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            config.base_url = base_url;
        }
        config
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the per-attempt request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    /// Set the maximum number of attempts, keeping the rest of the retry config.
    pub fn with_max_retries(mut self, max_attempts: u32) -> Self {
        self.config.retry.max_attempts = max_attempts;
        self
    }

    /// Disable retries.
    pub fn without_retry(mut self) -> Self {
        self.config.retry = RetryConfig::no_retry();
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable debug logging of attempts and statuses.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
