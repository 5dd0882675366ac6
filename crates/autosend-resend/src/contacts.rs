//! `resend.contacts` on top of Autosend.
//!
//! Autosend addresses contacts by id for reads and deletes, and by email for
//! updates. Selectors are resolved to an id up front; anything that cannot
//! resolve is rejected before a request is made.

use autosend_api::Autosend;
use tracing::instrument;

use crate::error::ResendError;
use crate::types::{
    Contact, CreateContactOptions, CreateContactResponse, RemoveContactResponse, ResendResponse,
    UpdateContactOptions, UpdateContactResponse,
};

const EMAIL_LOOKUP_UNSUPPORTED: &str =
    "Email-based lookup is not supported. Use the contact id instead.";
const EMAIL_REMOVAL_UNSUPPORTED: &str =
    "Email-based removal is not supported. Use the contact id instead.";
const EMAIL_REQUIRED_FOR_UPDATE: &str = "Email is required for update";

/// How a caller identifies a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSelector {
    /// A bare string, treated as an id.
    Raw(String),
    Id(String),
    Email(String),
}

impl ContactSelector {
    /// Build a selector from Resend's `{ id?, email? }` form. The id wins
    /// when both are given.
    pub fn from_fields(id: Option<String>, email: Option<String>) -> Self {
        match (id, email) {
            (Some(id), _) => ContactSelector::Id(id),
            (None, Some(email)) => ContactSelector::Email(email),
            (None, None) => ContactSelector::Id(String::new()),
        }
    }

    /// The contact id, if this selector names one.
    pub fn id(&self) -> Option<&str> {
        match self {
            ContactSelector::Raw(id) | ContactSelector::Id(id) if !id.trim().is_empty() => {
                Some(id)
            }
            _ => None,
        }
    }
}

impl From<&str> for ContactSelector {
    fn from(value: &str) -> Self {
        ContactSelector::Raw(value.to_string())
    }
}

impl From<String> for ContactSelector {
    fn from(value: String) -> Self {
        ContactSelector::Raw(value)
    }
}

/// Resend-compatible contact management.
#[derive(Debug, Clone)]
pub struct ContactsAdapter {
    client: Autosend,
}

impl ContactsAdapter {
    pub fn new(client: Autosend) -> Self {
        Self { client }
    }

    /// Create a contact. `audience_id` and `unsubscribed` are ignored.
    #[instrument(skip(self, options))]
    pub async fn create(
        &self,
        options: &CreateContactOptions,
    ) -> ResendResponse<CreateContactResponse> {
        let request = autosend_api::CreateContactOptions {
            email: options.email.clone(),
            first_name: options.first_name.clone().map(Some),
            last_name: options.last_name.clone().map(Some),
            user_id: None,
            custom_fields: options.properties.clone(),
            list_ids: options.list_ids.clone(),
        };

        match self.client.contacts().create(&request).await {
            Ok(response) => match response.into_result() {
                Ok(contact) => ResendResponse::success(CreateContactResponse { id: contact.id }),
                Err(failure) => ResendResponse::failure(ResendError::from_failure(failure)),
            },
            Err(err) => ResendResponse::failure(ResendError::api_error(&err)),
        }
    }

    /// Fetch a contact by id.
    #[instrument(skip(self, selector))]
    pub async fn get(&self, selector: impl Into<ContactSelector>) -> ResendResponse<Contact> {
        let selector = selector.into();
        let Some(id) = selector.id() else {
            return ResendResponse::failure(ResendError::validation(EMAIL_LOOKUP_UNSUPPORTED));
        };

        match self.client.contacts().get(id).await {
            Ok(response) => match response.into_result() {
                Ok(contact) => ResendResponse::success(Contact::from(contact)),
                Err(failure) => ResendResponse::failure(ResendError::from_failure(failure)),
            },
            Err(err) => ResendResponse::failure(ResendError::api_error(&err)),
        }
    }

    /// Update a contact, matched by email.
    ///
    /// `unsubscribed` has no Autosend counterpart and is not sent.
    #[instrument(skip(self, options))]
    pub async fn update(
        &self,
        options: &UpdateContactOptions,
    ) -> ResendResponse<UpdateContactResponse> {
        let Some(email) = options.email.as_ref().filter(|email| !email.trim().is_empty()) else {
            return ResendResponse::failure(ResendError::validation(EMAIL_REQUIRED_FOR_UPDATE));
        };

        let request = autosend_api::CreateContactOptions {
            email: email.clone(),
            first_name: options.first_name.clone(),
            last_name: options.last_name.clone(),
            user_id: None,
            custom_fields: options.properties.clone(),
            list_ids: options.list_ids.clone(),
        };

        match self.client.contacts().upsert(&request).await {
            Ok(response) => match response.into_result() {
                Ok(contact) => ResendResponse::success(UpdateContactResponse { id: contact.id }),
                Err(failure) => ResendResponse::failure(ResendError::from_failure(failure)),
            },
            Err(err) => ResendResponse::failure(ResendError::api_error(&err)),
        }
    }

    /// Delete a contact by id.
    #[instrument(skip(self, selector))]
    pub async fn remove(
        &self,
        selector: impl Into<ContactSelector>,
    ) -> ResendResponse<RemoveContactResponse> {
        let selector = selector.into();
        let Some(id) = selector.id() else {
            return ResendResponse::failure(ResendError::validation(EMAIL_REMOVAL_UNSUPPORTED));
        };

        match self.client.contacts().delete(id).await {
            Ok(response) => match response.into_result() {
                Ok(()) => ResendResponse::success(RemoveContactResponse {
                    deleted: true,
                    contact: id.to_string(),
                }),
                Err(failure) => ResendResponse::failure(ResendError::from_failure(failure)),
            },
            Err(err) => ResendResponse::failure(ResendError::api_error(&err)),
        }
    }
}
