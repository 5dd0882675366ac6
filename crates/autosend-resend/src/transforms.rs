//! Conversion from Resend-shaped options to Autosend requests.

use std::sync::LazyLock;

use autosend_api::{EmailAddress, Recipients, Variables};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{AddressList, SendEmailOptions};

static NAMED_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*<(.+)>$").expect("address pattern is valid"));

/// Parse `"Name <address>"` or a bare address.
///
/// A display name that is blank after trimming is dropped.
pub fn parse_email_address(input: &str) -> EmailAddress {
    if let Some(captures) = NAMED_ADDRESS.captures(input) {
        let name = captures[1].trim();
        let address = EmailAddress::new(captures[2].trim());
        return if name.is_empty() {
            address
        } else {
            address.with_name(name)
        };
    }

    EmailAddress::new(input.trim())
}

/// Parse every address in the list.
pub fn parse_email_addresses(addresses: &AddressList) -> Vec<EmailAddress> {
    addresses.iter().map(parse_email_address).collect()
}

/// Number of `to` recipients. Decides between the single and bulk endpoints.
pub fn recipient_count(options: &SendEmailOptions) -> usize {
    options.to.len()
}

/// Build a native single-send request.
///
/// `to` is sent as a scalar when it holds exactly one address; cc and bcc
/// are always lists; reply-to keeps only the first address.
pub fn to_send_request(options: &SendEmailOptions) -> autosend_api::SendEmailOptions {
    let mut to = parse_email_addresses(&options.to);
    let to = if to.len() == 1 {
        Recipients::One(to.remove(0))
    } else {
        Recipients::Many(to)
    };

    autosend_api::SendEmailOptions {
        from: parse_email_address(&options.from),
        to,
        subject: options.subject.clone(),
        html: non_empty(&options.html),
        text: non_empty(&options.text),
        template_id: None,
        cc: options
            .cc
            .as_ref()
            .map(|cc| Recipients::Many(parse_email_addresses(cc))),
        bcc: options
            .bcc
            .as_ref()
            .map(|bcc| Recipients::Many(parse_email_addresses(bcc))),
        reply_to: first_address(&options.reply_to),
        dynamic_data: options.variables.clone(),
    }
}

/// Body of the batch endpoint used for multi-recipient sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendRequest {
    pub from: EmailAddress,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,
    pub recipients: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_data: Option<Variables>,
}

/// Build a batch request. cc and bcc are not carried over.
pub fn to_bulk_request(options: &SendEmailOptions) -> BulkSendRequest {
    BulkSendRequest {
        from: parse_email_address(&options.from),
        subject: options.subject.clone(),
        html: non_empty(&options.html),
        text: non_empty(&options.text),
        reply_to: first_address(&options.reply_to),
        recipients: parse_email_addresses(&options.to),
        dynamic_data: options.variables.clone(),
    }
}

/// Body returned by the batch endpoint: `{ data: { batchId }, error: { message } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BulkSendResponse {
    #[serde(default)]
    pub data: Option<BulkBatch>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkBatch {
    #[serde(default)]
    pub batch_id: Option<String>,
}

impl BulkSendResponse {
    pub fn batch_id(&self) -> Option<&str> {
        self.data.as_ref()?.batch_id.as_deref()
    }

    /// The `error.message` reported in the body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref()?.get("message")?.as_str()
    }
}

fn first_address(addresses: &Option<AddressList>) -> Option<EmailAddress> {
    addresses
        .as_ref()
        .and_then(|list| list.iter().next())
        .map(parse_email_address)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
