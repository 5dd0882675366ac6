//! Request and response types for the Autosend API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Template variables, keyed by name.
pub type Variables = BTreeMap<String, Variable>;

/// Custom contact fields to write. A `None` value is sent as JSON `null`.
pub type CustomFields = BTreeMap<String, Option<Variable>>;

/// Custom contact fields as returned by the API, any JSON value.
pub type ContactFields = BTreeMap<String, serde_json::Value>;

/// Deserialize a field where an explicit `null` differs from an absent key.
///
/// Use with `#[serde(default)]`: absent is `None`, `null` is `Some(None)`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    /// A bare address with no display name.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// One recipient or a list of them.
///
/// The API treats the two forms differently, so a single recipient should be
/// sent as [`Recipients::One`] rather than a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(EmailAddress),
    Many(Vec<EmailAddress>),
}

impl Recipients {
    /// Number of addresses.
    pub fn len(&self) -> usize {
        match self {
            Recipients::One(_) => 1,
            Recipients::Many(list) => list.len(),
        }
    }

    /// Returns true if there are no addresses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<EmailAddress> for Recipients {
    fn from(address: EmailAddress) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<EmailAddress>> for Recipients {
    fn from(addresses: Vec<EmailAddress>) -> Self {
        Recipients::Many(addresses)
    }
}

/// A template variable or custom field value: a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variable {
    Text(String),
    Number(serde_json::Number),
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Variable::Text(value.to_string())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Variable::Text(value)
    }
}

impl From<i32> for Variable {
    fn from(value: i32) -> Self {
        Variable::Number(value.into())
    }
}

impl From<i64> for Variable {
    fn from(value: i64) -> Self {
        Variable::Number(value.into())
    }
}

impl From<u64> for Variable {
    fn from(value: u64) -> Self {
        Variable::Number(value.into())
    }
}

// =============================================================================
// Emails
// =============================================================================

/// Options for sending a single email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailOptions {
    pub from: EmailAddress,
    pub to: Recipients,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_data: Option<Variables>,
}

impl SendEmailOptions {
    /// Create options with the required fields.
    pub fn new(from: EmailAddress, to: impl Into<Recipients>, subject: impl Into<String>) -> Self {
        Self {
            from,
            to: to.into(),
            subject: subject.into(),
            html: None,
            text: None,
            template_id: None,
            cc: None,
            bcc: None,
            reply_to: None,
            dynamic_data: None,
        }
    }

    /// Set the HTML body.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain-text body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Send using a stored template.
    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Set the cc recipients.
    pub fn with_cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Set the bcc recipients.
    pub fn with_bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Set the reply-to address.
    pub fn with_reply_to(mut self, reply_to: EmailAddress) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Add a dynamic template variable.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Variable>) -> Self {
        self.dynamic_data
            .get_or_insert_with(Variables::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Response from sending a single email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub email_id: String,
}

/// Options for sending a batch of emails in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSendEmailOptions {
    pub emails: Vec<SendEmailOptions>,
}

/// Response from a bulk send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendEmailResponse {
    #[serde(default)]
    pub email_ids: Vec<String>,
}

// =============================================================================
// Contacts
// =============================================================================

/// A contact as stored by Autosend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<ContactFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    /// Creation time exactly as the server sent it. Numbers are kept as
    /// their decimal text.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl Contact {
    /// `created_at` parsed as RFC 3339, if it is in that format.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// `updated_at` parsed as RFC 3339, if present and in that format.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_timestamp(deserializer)?.unwrap_or_default())
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a timestamp string or number, got {other}"
        ))),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Fields for creating or upserting a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactOptions {
    pub email: String,
    /// `Some(None)` sends `null`, clearing the name on upsert.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
}

impl CreateContactOptions {
    /// Create options for the given email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(Some(first_name.into()));
        self
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(Some(last_name.into()));
        self
    }

    /// Send an explicit `null` first name.
    pub fn clear_first_name(mut self) -> Self {
        self.first_name = Some(None);
        self
    }

    /// Send an explicit `null` last name.
    pub fn clear_last_name(mut self) -> Self {
        self.last_name = Some(None);
        self
    }

    /// Set a custom field.
    pub fn with_custom_field(mut self, name: impl Into<String>, value: impl Into<Variable>) -> Self {
        self.custom_fields
            .get_or_insert_with(CustomFields::new)
            .insert(name.into(), Some(value.into()));
        self
    }

    /// Set the lists the contact belongs to.
    pub fn with_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }
}
