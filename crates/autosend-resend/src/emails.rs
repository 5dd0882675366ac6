//! `resend.emails` on top of Autosend.

use autosend_api::{Autosend, BULK_PATH};
use tracing::{debug, instrument, warn};

use crate::error::{map_http_status, ResendError, UNKNOWN_ERROR};
use crate::transforms::{recipient_count, to_bulk_request, to_send_request, BulkSendResponse};
use crate::types::{CreateEmailResponse, ResendResponse, SendEmailOptions};

/// A Resend option that Autosend cannot honor. Present values are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedFeature {
    Tags,
    Attachments,
    Headers,
    ScheduledAt,
}

impl UnsupportedFeature {
    /// The warning logged when the feature is present.
    pub fn message(&self) -> &'static str {
        match self {
            UnsupportedFeature::Tags => "tags are not supported and will be ignored",
            UnsupportedFeature::Attachments => "attachments are not currently supported",
            UnsupportedFeature::Headers => "custom headers are not supported and will be ignored",
            UnsupportedFeature::ScheduledAt => "scheduledAt is not supported and will be ignored",
        }
    }
}

impl std::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnsupportedFeature::Tags => "tags",
            UnsupportedFeature::Attachments => "attachments",
            UnsupportedFeature::Headers => "headers",
            UnsupportedFeature::ScheduledAt => "scheduledAt",
        };
        f.write_str(name)
    }
}

/// The unsupported options set on `options`, in a fixed order.
pub fn unsupported_features(options: &SendEmailOptions) -> Vec<UnsupportedFeature> {
    let mut features = Vec::new();
    if options.tags.as_ref().is_some_and(|tags| !tags.is_empty()) {
        features.push(UnsupportedFeature::Tags);
    }
    if options
        .attachments
        .as_ref()
        .is_some_and(|attachments| !attachments.is_empty())
    {
        features.push(UnsupportedFeature::Attachments);
    }
    if options
        .headers
        .as_ref()
        .is_some_and(|headers| !headers.is_empty())
    {
        features.push(UnsupportedFeature::Headers);
    }
    if options.scheduled_at.is_some() {
        features.push(UnsupportedFeature::ScheduledAt);
    }
    features
}

/// Resend-compatible email sending.
#[derive(Debug, Clone)]
pub struct EmailsAdapter {
    client: Autosend,
}

impl EmailsAdapter {
    pub fn new(client: Autosend) -> Self {
        Self { client }
    }

    /// Send an email.
    ///
    /// More than one `to` address goes through the batch endpoint as a
    /// single request. Never fails: every error is reported in the envelope.
    #[instrument(skip(self, options), fields(recipients = recipient_count(options)))]
    pub async fn send(&self, options: &SendEmailOptions) -> ResendResponse<CreateEmailResponse> {
        for feature in unsupported_features(options) {
            warn!(feature = %feature, "{}", feature.message());
        }

        let result = if recipient_count(options) > 1 {
            self.send_bulk(options).await
        } else {
            self.send_single(options).await
        };

        result.unwrap_or_else(|err| ResendResponse::failure(ResendError::api_error(&err)))
    }

    async fn send_single(
        &self,
        options: &SendEmailOptions,
    ) -> autosend_api::Result<ResendResponse<CreateEmailResponse>> {
        let request = to_send_request(options);
        let response = self.client.emails().send(&request).await?;

        Ok(match response.into_result() {
            Ok(sent) => ResendResponse::success(CreateEmailResponse { id: sent.email_id }),
            Err(failure) => ResendResponse::failure(ResendError::from_failure(failure)),
        })
    }

    async fn send_bulk(
        &self,
        options: &SendEmailOptions,
    ) -> autosend_api::Result<ResendResponse<CreateEmailResponse>> {
        let request = to_bulk_request(options);
        debug!(recipients = request.recipients.len(), "Sending as batch");

        let response = self
            .client
            .http()
            .post_json::<Option<BulkSendResponse>, _>(BULK_PATH, &request)
            .await?;

        // A 2xx without a batch id carries no status of its own.
        let status = response
            .status_code()
            .filter(|status| *status != 0)
            .unwrap_or(500);
        let transport_error = response.error().map(str::to_string);
        let body = response.into_data().flatten().unwrap_or_default();

        if let Some(batch_id) = body.batch_id() {
            return Ok(ResendResponse::success(CreateEmailResponse {
                id: batch_id.to_string(),
            }));
        }

        let message = body
            .error_message()
            .map(str::to_string)
            .or(transport_error)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

        Ok(ResendResponse::failure(map_http_status(status, message)))
    }
}
