//! Core HTTP client with timeout, retry and response normalization.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{is_retryable_status, Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::{error_message_from_body, ApiResponse, TIMEOUT_ERROR};
use crate::retry::RetryPolicy;

/// HTTP client for the Autosend API with built-in timeout, retry and error
/// normalization.
///
/// HTTP failures never surface as `Err`: every call that reaches the network
/// resolves to an [`ApiResponse`]. `Err` is reserved for a request that
/// cannot be built and a success body that cannot be decoded.
///
/// ## Security
///
/// The API key is redacted in Debug output and never logged.
#[derive(Clone)]
pub struct AutosendHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for AutosendHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutosendHttpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Status and body text of one completed attempt.
struct RawResponse {
    status: u16,
    body: String,
}

impl AutosendHttpClient {
    /// Create a new HTTP client.
    ///
    /// Fails if the API key is blank or the base URL is not an absolute
    /// `http(s)` URL.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "API key is required".to_string(),
            )));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::Config(format!(
                "Unsupported base URL scheme: {}",
                parsed.scheme()
            ))));
        }

        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            base_url,
            api_key,
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn with_defaults(api_key: impl Into<String>) -> Result<Self> {
        Self::new(api_key, ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Create a request builder for a path relative to the base URL.
    pub fn request(&self, method: RequestMethod, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, path)
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.execute(self.request(RequestMethod::Get, path)).await
    }

    /// POST request with JSON body and response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let request = self.request(RequestMethod::Post, path).json(body)?;
        self.execute(request).await
    }

    /// DELETE request. Only the status matters; the body is discarded.
    pub async fn delete_request(&self, path: &str) -> Result<ApiResponse<()>> {
        self.execute_with(self.request(RequestMethod::Delete, path), |_| Ok(()))
            .await
    }

    /// Execute a request, decoding a successful body as JSON.
    ///
    /// An empty success body decodes as JSON `null`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        self.execute_with(request, decode_json).await
    }

    /// Execute a request with automatic retry handling.
    #[instrument(skip(self, request, decode), fields(method = %request.method, path = %request.path))]
    async fn execute_with<T>(
        &self,
        request: RequestBuilder,
        decode: impl Fn(&str) -> Result<T>,
    ) -> Result<ApiResponse<T>> {
        let url = self.url(&request.path);
        let mut policy = RetryPolicy::new(self.config.retry.clone());
        let mut last_status: u16 = 0;

        loop {
            let attempt = policy.start_attempt();
            if self.config.debug {
                debug!(
                    attempt,
                    max_attempts = policy.max_attempts(),
                    has_body = request.body.is_some(),
                    "Sending request"
                );
            }

            match self.execute_once(&request, &url).await {
                Ok(RawResponse { status, body }) if (200..300).contains(&status) => {
                    if self.config.debug {
                        debug!(status, "Response received");
                    }
                    return Ok(ApiResponse::success(decode(&body)?));
                }
                Ok(RawResponse { status, body }) => {
                    last_status = status;
                    let message = error_message_from_body(status, &body);
                    if self.config.debug {
                        info!(status, error = %message, "Non-success response");
                    }

                    if is_retryable_status(status) {
                        if let Some(delay) = policy.next_delay() {
                            warn!(
                                attempt,
                                status,
                                delay_ms = delay.as_millis() as u64,
                                "Retryable error, retrying"
                            );
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                    }

                    return Ok(ApiResponse::failure(message, status));
                }
                Err(err) if err.is_timeout() => {
                    warn!(attempt, timeout_ms = self.config.timeout.as_millis() as u64, "Request timed out");
                    return Ok(ApiResponse::failure(TIMEOUT_ERROR, 0));
                }
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    warn!(attempt, error = %err, "Network error");

                    match policy.next_delay() {
                        Some(delay) => {
                            warn!(attempt, delay_ms = delay.as_millis() as u64, "Retrying after network error");
                            tokio::time::sleep(delay).await;
                        }
                        None => return Ok(ApiResponse::failure(err.to_string(), last_status)),
                    }
                }
            }
        }
    }

    /// Execute a single attempt without retry logic.
    async fn execute_once(&self, request: &RequestBuilder, url: &str) -> Result<RawResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(self.config.timeout);

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        Ok(serde_json::from_value(serde_json::Value::Null)?)
    } else {
        Ok(serde_json::from_str(body)?)
    }
}
