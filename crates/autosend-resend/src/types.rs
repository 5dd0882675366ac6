//! Resend-shaped request and response types.

use std::collections::BTreeMap;

use autosend_api::{deserialize_nullable, ContactFields, CustomFields, Variables};
use serde::{Deserialize, Serialize};

use crate::error::ResendError;

// =============================================================================
// Envelope
// =============================================================================

/// Result of every adapter operation: `{ data, error }`.
///
/// Exactly one side is set. Both are always serialized, the empty side as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResendResponse<T> {
    data: Option<T>,
    error: Option<ResendError>,
}

impl<T> ResendResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ResendError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ResendError> {
        self.error.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, ResendError> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(ResendError::api_error(&"")),
        }
    }
}

// =============================================================================
// Emails
// =============================================================================

/// A single address string or a list of them. Strings may be bare
/// addresses or `"Name <address>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressList {
    One(String),
    Many(Vec<String>),
}

impl AddressList {
    /// Number of address strings.
    pub fn len(&self) -> usize {
        match self {
            AddressList::One(_) => 1,
            AddressList::Many(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the raw address strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice = match self {
            AddressList::One(address) => std::slice::from_ref(address),
            AddressList::Many(list) => list.as_slice(),
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for AddressList {
    fn from(address: &str) -> Self {
        AddressList::One(address.to_string())
    }
}

impl From<String> for AddressList {
    fn from(address: String) -> Self {
        AddressList::One(address)
    }
}

impl From<Vec<String>> for AddressList {
    fn from(addresses: Vec<String>) -> Self {
        AddressList::Many(addresses)
    }
}

impl From<Vec<&str>> for AddressList {
    fn from(addresses: Vec<&str>) -> Self {
        AddressList::Many(addresses.into_iter().map(str::to_string).collect())
    }
}

/// An attachment. Accepted but not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A message tag. Accepted but not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// Options for `emails.send`, in Resend's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailOptions {
    pub from: String,
    pub to: AddressList,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<AddressList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<AddressList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<AddressList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl SendEmailOptions {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<AddressList>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            html: None,
            text: None,
            cc: None,
            bcc: None,
            reply_to: None,
            headers: None,
            attachments: None,
            tags: None,
            scheduled_at: None,
            variables: None,
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_cc(mut self, cc: impl Into<AddressList>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    pub fn with_bcc(mut self, bcc: impl Into<AddressList>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<AddressList>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(Tag {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_scheduled_at(mut self, scheduled_at: impl Into<String>) -> Self {
        self.scheduled_at = Some(scheduled_at.into());
        self
    }

    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<autosend_api::Variable>,
    ) -> Self {
        self.variables
            .get_or_insert_with(Variables::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Result of a send: the email id, or the batch id for multi-recipient sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmailResponse {
    pub id: String,
}

// =============================================================================
// Contacts
// =============================================================================

/// A contact in Resend's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Passed through from Autosend without reformatting.
    pub created_at: String,
    pub unsubscribed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ContactFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
}

impl From<autosend_api::Contact> for Contact {
    fn from(contact: autosend_api::Contact) -> Self {
        // Autosend has no subscription flag on contacts.
        Self {
            id: contact.id,
            email: contact.email,
            first_name: contact.first_name,
            last_name: contact.last_name,
            created_at: contact.created_at,
            unsubscribed: false,
            properties: contact.custom_fields,
            list_ids: contact.list_ids,
        }
    }
}

/// Options for `contacts.create`.
///
/// `audience_id` and `unsubscribed` are accepted but have no Autosend
/// counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<CustomFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
}

impl CreateContactOptions {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<autosend_api::Variable>,
    ) -> Self {
        self.properties
            .get_or_insert_with(CustomFields::new)
            .insert(name.into(), Some(value.into()));
        self
    }

    pub fn with_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }
}

/// Options for `contacts.update`. Updates are keyed by `email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `Some(None)` clears the name.
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
    pub unsubscribed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<CustomFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
}

impl UpdateContactOptions {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(Some(first_name.into()));
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(Some(last_name.into()));
        self
    }

    /// Set the first name to `null`.
    pub fn clear_first_name(mut self) -> Self {
        self.first_name = Some(None);
        self
    }

    /// Set the last name to `null`.
    pub fn clear_last_name(mut self) -> Self {
        self.last_name = Some(None);
        self
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<autosend_api::Variable>,
    ) -> Self {
        self.properties
            .get_or_insert_with(CustomFields::new)
            .insert(name.into(), Some(value.into()));
        self
    }

    pub fn with_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveContactResponse {
    pub deleted: bool,
    /// Id of the removed contact.
    pub contact: String,
}
