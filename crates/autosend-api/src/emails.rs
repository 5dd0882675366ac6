//! Email sending.

use autosend_client::{ApiResponse, AutosendHttpClient, Result};
use tracing::instrument;

use crate::types::{BulkSendEmailOptions, BulkSendEmailResponse, SendEmailOptions, SendEmailResponse};

/// Path of the single-send endpoint.
pub const SEND_PATH: &str = "/mails/send";

/// Path of the bulk-send endpoint.
pub const BULK_PATH: &str = "/mails/bulk";

/// Client for the `/mails` endpoints.
#[derive(Debug, Clone)]
pub struct Emails {
    http: AutosendHttpClient,
}

impl Emails {
    /// Create an emails client over an existing transport.
    pub fn new(http: AutosendHttpClient) -> Self {
        Self { http }
    }

    /// Send a single email.
    #[instrument(skip(self, options), fields(subject = %options.subject))]
    pub async fn send(&self, options: &SendEmailOptions) -> Result<ApiResponse<SendEmailResponse>> {
        self.http.post_json(SEND_PATH, options).await
    }

    /// Send a batch of emails in one request.
    #[instrument(skip(self, options), fields(count = options.emails.len()))]
    pub async fn bulk(
        &self,
        options: &BulkSendEmailOptions,
    ) -> Result<ApiResponse<BulkSendEmailResponse>> {
        self.http.post_json(BULK_PATH, options).await
    }
}
