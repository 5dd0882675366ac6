//! Resend-compatible surface, end to end through the umbrella crate.

use super::common::{autosend, contact_json, resend};
use autosend::resend::{
    parse_email_addresses, AddressList, ContactSelector, ContactsAdapter, CreateContactOptions,
    EmailsAdapter, ErrorName, SendEmailOptions, UpdateContactOptions,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_send(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/mails/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"emailId": "email-123"})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_bulk(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/mails/bulk"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"batchId": "batch-9"}})),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[test]
fn test_parse_empty_list() {
    assert!(parse_email_addresses(&AddressList::Many(vec![])).is_empty());
}

#[tokio::test]
async fn test_single_send_envelope() {
    let server = MockServer::start().await;
    mount_send(&server, 1).await;
    mount_bulk(&server, 0).await;

    let response = resend(&server)
        .emails()
        .send(&SendEmailOptions::new(
            "Acme <onboarding@acme.dev>",
            "user@example.com",
            "Hello",
        ))
        .await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"data": {"id": "email-123"}, "error": null})
    );
}

#[tokio::test]
async fn test_one_element_list_is_sent_as_scalar() {
    let server = MockServer::start().await;
    mount_send(&server, 1).await;
    mount_bulk(&server, 0).await;

    let options = SendEmailOptions::new(
        "onboarding@acme.dev",
        vec!["Ada <ada@example.com>"],
        "Hello",
    )
    .with_bcc(vec!["audit@acme.dev"]);
    let response = resend(&server).emails().send(&options).await;
    assert!(response.is_success());

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["to"], json!({"email": "ada@example.com", "name": "Ada"}));
    assert_eq!(body["bcc"], json!([{"email": "audit@acme.dev"}]));
}

#[tokio::test]
async fn test_many_recipients_make_one_bulk_call() {
    let server = MockServer::start().await;
    mount_send(&server, 0).await;
    mount_bulk(&server, 1).await;

    let options = SendEmailOptions::new(
        "onboarding@acme.dev",
        vec!["a@example.com", "b@example.com"],
        "Hello",
    )
    .with_html("<p>Hi {{name}}</p>")
    .with_reply_to("Support <support@acme.dev>")
    .with_variable("name", "friend")
    .with_tag("campaign", "launch")
    .with_scheduled_at("2030-01-01T00:00:00Z");

    let response = resend(&server).emails().send(&options).await;
    assert_eq!(response.into_data().unwrap().id, "batch-9");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body,
        json!({
            "from": {"email": "onboarding@acme.dev"},
            "subject": "Hello",
            "html": "<p>Hi {{name}}</p>",
            "replyTo": {"email": "support@acme.dev", "name": "Support"},
            "recipients": [{"email": "a@example.com"}, {"email": "b@example.com"}],
            "dynamicData": {"name": "friend"}
        })
    );
}

#[tokio::test]
async fn test_contact_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("c-7", "ada@example.com")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts/c-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("c-7", "ada@example.com")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/contacts/email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("c-7", "ada@example.com")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/c-7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = resend(&server);
    let contacts = client.contacts();

    let created = contacts
        .create(&CreateContactOptions::new("ada@example.com").with_property("plan", "pro"))
        .await;
    let id = created.into_data().unwrap().id;

    let fetched = contacts.get(ContactSelector::Id(id.clone())).await;
    assert_eq!(
        serde_json::to_value(fetched.data().unwrap()).unwrap(),
        json!({
            "id": "c-7",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "createdAt": "2024-03-01T12:00:00Z",
            "unsubscribed": false,
            "properties": {"plan": "pro", "seats": 3},
            "listIds": ["list-1"]
        })
    );

    let updated = contacts
        .update(&UpdateContactOptions::new("ada@example.com").with_first_name("Augusta"))
        .await;
    assert_eq!(updated.data().unwrap().id, "c-7");

    let removed = contacts.remove(id.as_str()).await;
    assert_eq!(
        serde_json::to_value(&removed).unwrap(),
        json!({"data": {"deleted": true, "contact": "c-7"}, "error": null})
    );
}

#[tokio::test]
async fn test_get_missing_contact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/nonexistent"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Contact not found"))
        .expect(1)
        .mount(&server)
        .await;

    let response = resend(&server).contacts().get("nonexistent").await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "data": null,
            "error": {"name": "not_found", "message": "Contact not found", "statusCode": 404}
        })
    );
}

#[tokio::test]
async fn test_validation_errors_make_no_calls() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let contacts = ContactsAdapter::new(autosend(&server));

    let by_email = contacts
        .get(ContactSelector::Email("ada@example.com".to_string()))
        .await;
    assert_eq!(by_email.error().unwrap().name, ErrorName::ValidationError);

    let no_email = contacts.update(&UpdateContactOptions::default()).await;
    assert_eq!(no_email.error().unwrap().name, ErrorName::ValidationError);

    let remove_by_email = contacts
        .remove(ContactSelector::from_fields(None, Some("ada@example.com".to_string())))
        .await;
    assert_eq!(remove_by_email.error().unwrap().name, ErrorName::ValidationError);
}

#[tokio::test]
async fn test_exhausted_server_errors_map_to_internal_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mails/send"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Upstream down"})))
        .expect(3)
        .mount(&server)
        .await;

    let emails = EmailsAdapter::new(autosend(&server));
    let response = emails
        .send(&SendEmailOptions::new("a@acme.dev", "b@example.com", "Hi"))
        .await;

    let error = response.error().unwrap();
    assert_eq!(error.name, ErrorName::InternalServerError);
    assert_eq!(error.message, "Upstream down");
    assert_eq!(error.status_code, Some(500));
}
