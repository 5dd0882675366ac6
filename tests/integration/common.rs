use std::time::Duration;

use autosend::api::Autosend;
use autosend::client::{ClientConfig, RetryConfig};
use autosend::resend::{Resend, ResendOptions};
use wiremock::MockServer;

pub const API_KEY: &str = "as_test_key";

/// Install a test-writer subscriber once. `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Config pointed at the mock server, with millisecond backoff.
pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(2))
        .with_retry(RetryConfig::default().with_initial_delay(Duration::from_millis(10)))
        .with_debug(true)
        .build()
}

pub fn autosend(server: &MockServer) -> Autosend {
    init_tracing();
    Autosend::new(API_KEY, config(server)).expect("client should build")
}

/// A Resend facade on default retry settings. Use only where no retry happens.
pub fn resend(server: &MockServer) -> Resend {
    init_tracing();
    Resend::new(
        Some(API_KEY.to_string()),
        ResendOptions::default().with_base_url(server.uri()),
    )
    .expect("client should build")
}

pub fn contact_json(id: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "customFields": {"plan": "pro", "seats": 3},
        "listIds": ["list-1"],
        "createdAt": "2024-03-01T12:00:00Z",
        "updatedAt": "2024-03-02T08:30:00Z"
    })
}
