mod common;

use common::TestApp;
use reqwest::Client;

// =============================================================================
// Welcome
// =============================================================================

#[tokio::test]
async fn welcome_returns_fixed_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "API de Empresa de Limpieza en Zúrich");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .header("origin", "https://limpieza.example")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing CORS header"),
        "*"
    );
}

// =============================================================================
// Schema
// =============================================================================

#[tokio::test]
async fn schema_describes_cleaninginquiry() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/schema", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["cleaninginquiry"]["name"], "cleaninginquiry");

    let fields = &body["cleaninginquiry"]["fields"];
    assert!(fields.is_object());
    assert!(fields["properties"].get("email").is_some());
    assert!(fields["properties"].get("service_type").is_some());
}

// =============================================================================
// Connection test
// =============================================================================

#[tokio::test]
async fn connection_test_always_returns_200() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["backend"], "running");
    for key in [
        "database",
        "database_url",
        "database_name",
        "connection_status",
        "collections",
    ] {
        assert!(body.get(key).is_some(), "missing diagnostic key {}", key);
    }

    if app.database_available().await {
        assert_eq!(body["connection_status"], "connected");
        assert!(body["database"].as_str().unwrap().starts_with("connected"));
    }
}

#[tokio::test]
async fn connection_test_reports_error_when_database_down() {
    let app = TestApp::spawn_without_database().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["connection_status"], "not connected");
    assert!(body["database"].as_str().unwrap().starts_with("error:"));
    assert!(body["collections"].as_array().unwrap().is_empty());
}
