//! Native client flows: emails, contacts and transport behavior.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::common::{autosend, config, contact_json, API_KEY};
use autosend::api::{
    Autosend, BulkSendEmailOptions, CreateContactOptions, EmailAddress, SendEmailOptions,
};
use autosend::client::{ApiResponse, BackoffStrategy, ClientConfig, RetryConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn welcome(to: &str) -> SendEmailOptions {
    SendEmailOptions::new(
        EmailAddress::new("hello@myapp.com").with_name("My App"),
        EmailAddress::new(to),
        "Welcome!",
    )
    .with_html("<h1>Welcome</h1>")
    .with_variable("firstName", "Ada")
}

// ============================================================================
// Emails
// ============================================================================

#[tokio::test]
async fn test_send_email_headers_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mails/send"))
        .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"emailId": "email-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = autosend(&server)
        .emails()
        .send(&welcome("ada@example.com"))
        .await
        .unwrap();

    assert_eq!(response.into_data().unwrap().email_id, "email-1");

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.starts_with("autosend-rust/"));

    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["to"], json!({"email": "ada@example.com"}));
    assert_eq!(body["from"]["name"], "My App");
    assert_eq!(body["dynamicData"], json!({"firstName": "Ada"}));
}

#[tokio::test]
async fn test_bulk_send() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mails/bulk"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"emailIds": ["e-1", "e-2"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = BulkSendEmailOptions {
        emails: vec![welcome("a@example.com"), welcome("b@example.com")],
    };
    let response = autosend(&server).emails().bulk(&options).await.unwrap();

    assert_eq!(response.into_data().unwrap().email_ids.len(), 2);
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn test_contact_lifecycle() {
    let server = MockServer::start().await;
    let client = autosend(&server);

    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(contact_json("c-1", "ada@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts/c-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(contact_json("c-1", "ada@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/contacts/email"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(contact_json("c-1", "ada@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .expect(1)
        .mount(&server)
        .await;

    let options = CreateContactOptions::new("ada@example.com")
        .with_first_name("Ada")
        .with_custom_field("plan", "pro")
        .with_custom_field("seats", 3);

    let created = client.contacts().create(&options).await.unwrap();
    let id = created.into_data().unwrap().id;

    let fetched = client.contacts().get(&id).await.unwrap().into_data().unwrap();
    assert_eq!(fetched.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(fetched.list_ids, Some(vec!["list-1".to_string()]));
    assert!(fetched.updated_at.is_some());

    let upserted = client.contacts().upsert(&options).await.unwrap();
    assert!(upserted.is_success());

    let deleted = client.contacts().delete(&id).await.unwrap();
    assert_eq!(deleted, ApiResponse::success(()));
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_recovers_after_transient_failures() {
    let server = MockServer::start().await;
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    Mock::given(method("GET"))
        .and(path("/contacts/c-1"))
        .respond_with(move |_: &Request| {
            match counter.fetch_add(1, Ordering::SeqCst) {
                0 => ResponseTemplate::new(503),
                1 => ResponseTemplate::new(429).set_body_json(json!({"message": "Slow down"})),
                _ => ResponseTemplate::new(200).set_body_json(contact_json("c-1", "a@example.com")),
            }
        })
        .mount(&server)
        .await;

    let response = autosend(&server).contacts().get("c-1").await.unwrap();

    assert!(response.is_success());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_rate_limit_exhausts_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mails/send"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"message": "Rate limit exceeded"})),
        )
        .expect(4)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .with_base_url(server.uri())
        .with_retry(
            RetryConfig::default()
                .with_max_attempts(4)
                .with_initial_delay(Duration::from_millis(5)),
        )
        .build();
    let client = Autosend::new(API_KEY, config).unwrap();

    let response = client.emails().send(&welcome("a@example.com")).await.unwrap();

    assert_eq!(response, ApiResponse::failure("Rate limit exceeded", 429));
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Email is invalid"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = autosend(&server)
        .contacts()
        .create(&CreateContactOptions::new("nope"))
        .await
        .unwrap();

    assert_eq!(response.error(), Some("Email is invalid"));
    assert_eq!(response.status_code(), Some(422));
}

#[tokio::test]
async fn test_timeout_is_reported_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(contact_json("slow", "a@example.com"))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .with_base_url(server.uri())
        .with_timeout_ms(50)
        .build();
    let client = Autosend::new(API_KEY, config).unwrap();

    let response = client.contacts().get("slow").await.unwrap();

    assert_eq!(response, ApiResponse::failure("Request timeout", 0));
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"success": false, "error": "Request timeout", "statusCode": 0})
    );
}

#[test]
fn test_default_backoff_schedule() {
    let retry = RetryConfig::default();
    assert_eq!(retry.max_attempts, 3);

    let delays: Vec<u128> = (0..3)
        .map(|n| {
            retry
                .backoff
                .delay(n, retry.initial_delay, retry.max_delay)
                .as_millis()
        })
        .collect();
    assert_eq!(delays, vec![1000, 2000, 4000]);

    assert_eq!(
        BackoffStrategy::Constant.delay(5, Duration::from_secs(1), Duration::from_secs(10)),
        Duration::from_secs(1)
    );
}

#[test]
fn test_config_rejects_bad_base_url() {
    let server_config = ClientConfig::builder().with_base_url("ftp://example.com").build();
    assert!(Autosend::new(API_KEY, server_config).is_err());
    assert!(Autosend::new("", ClientConfig::default()).is_err());
}

#[tokio::test]
async fn test_config_helper_points_at_server() {
    let server = MockServer::start().await;
    let config = config(&server);
    assert_eq!(config.base_url, server.uri());
    assert!(config.debug);
}
