//! Contact management.

use autosend_client::{encode_path_segment, ApiResponse, AutosendHttpClient, Result};
use tracing::instrument;

use crate::types::{Contact, CreateContactOptions};

/// Path of the contacts collection.
pub const CONTACTS_PATH: &str = "/contacts";

/// Path of the create-or-update-by-email endpoint.
pub const UPSERT_PATH: &str = "/contacts/email";

/// Client for the `/contacts` endpoints.
#[derive(Debug, Clone)]
pub struct Contacts {
    http: AutosendHttpClient,
}

impl Contacts {
    /// Create a contacts client over an existing transport.
    pub fn new(http: AutosendHttpClient) -> Self {
        Self { http }
    }

    /// Create a contact.
    #[instrument(skip(self, options))]
    pub async fn create(&self, options: &CreateContactOptions) -> Result<ApiResponse<Contact>> {
        self.http.post_json(CONTACTS_PATH, options).await
    }

    /// Fetch a contact by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<ApiResponse<Contact>> {
        self.http.get_json(&contact_path(id)).await
    }

    /// Delete a contact by id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<ApiResponse<()>> {
        self.http.delete_request(&contact_path(id)).await
    }

    /// Create a contact, or update the one with the same email.
    #[instrument(skip(self, options))]
    pub async fn upsert(&self, options: &CreateContactOptions) -> Result<ApiResponse<Contact>> {
        self.http.post_json(UPSERT_PATH, options).await
    }
}

fn contact_path(id: &str) -> String {
    format!("{}/{}", CONTACTS_PATH, encode_path_segment(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autosend_client::{ClientConfig, RetryConfig};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn contacts(server: &MockServer) -> Contacts {
        let config = ClientConfig::builder()
            .with_base_url(server.uri())
            .with_retry(RetryConfig::default().with_initial_delay(Duration::from_millis(10)))
            .build();
        Contacts::new(AutosendHttpClient::new("test-api-key", config).unwrap())
    }

    fn contact_json() -> serde_json::Value {
        json!({
            "id": "contact-123",
            "email": "test@example.com",
            "firstName": "John",
            "lastName": "Doe",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_contact_path_is_encoded() {
        assert_eq!(contact_path("contact-123"), "/contacts/contact-123");
        assert_eq!(contact_path("../admin"), "/contacts/..%2Fadmin");
    }

    #[tokio::test]
    async fn test_create() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/contacts"))
            .and(body_json(json!({"email": "test@example.com", "firstName": "John"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = CreateContactOptions::new("test@example.com").with_first_name("John");
        let result = contacts(&mock_server).create(&options).await.unwrap();

        let contact = result.into_data().unwrap();
        assert_eq!(contact.id, "contact-123");
        assert_eq!(contact.last_name.as_deref(), Some("Doe"));
    }

    #[tokio::test]
    async fn test_get() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contacts/contact-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = contacts(&mock_server).get("contact-123").await.unwrap();
        assert_eq!(result.data().unwrap().email, "test@example.com");
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contacts/nonexistent"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Contact not found"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = contacts(&mock_server).get("nonexistent").await.unwrap();

        assert_eq!(result, ApiResponse::failure("Contact not found", 404));
    }

    #[tokio::test]
    async fn test_delete() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/contacts/contact-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = contacts(&mock_server).delete("contact-123").await.unwrap();
        assert_eq!(result, ApiResponse::success(()));
    }

    #[tokio::test]
    async fn test_upsert() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/contacts/email"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = CreateContactOptions::new("test@example.com").with_last_name("Doe");
        let result = contacts(&mock_server).upsert(&options).await.unwrap();
        assert!(result.is_success());
    }
}
