//! Integration tests for service-level behavior: health probes,
//! request ids, CORS, and error envelopes.

use reqwest::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN};
use reqwest::{Method, StatusCode};
use securevision_integration_tests::TestApp;
use serde_json::{Value, json};

// ============================================================================
// Health Probe Tests
// ============================================================================

#[tokio::test]
async fn test_health_is_ok() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_readiness_is_ok() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Request Id Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    let header = resp
        .headers()
        .get("x-request-id")
        .expect("response should carry a request id");
    assert!(!header.is_empty());
}

#[tokio::test]
async fn test_caller_request_id_is_echoed() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/health"))
        .header("x-request-id", "integration-test-7f3a")
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(
        resp.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(&b"integration-test-7f3a"[..])
    );
}

// ============================================================================
// Email Validation Across Kinds
// ============================================================================

#[tokio::test]
async fn test_malformed_email_is_rejected_everywhere() {
    let app = TestApp::spawn().await;

    let submissions = [
        (
            "/api/contact",
            "email",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "not-an-email",
                "message": "hello"
            }),
        ),
        (
            "/api/demo-booking",
            "email",
            json!({
                "companyName": "Acme Retail",
                "email": "not-an-email",
                "numberOfCameras": 2,
                "selectedDate": "2026-09-01",
                "selectedTime": "10:30"
            }),
        ),
        (
            "/api/store-registration",
            "contactEmail",
            json!({
                "storeName": "Corner Shop",
                "storeAddress": "1 High Street",
                "contactEmail": "not-an-email",
                "numberOfCameras": 2,
                "numberOfUsers": 3,
                "totalPrice": "155"
            }),
        ),
    ];

    for (path, field, body) in submissions {
        let resp = app
            .client
            .post(app.url(path))
            .json(&body)
            .send()
            .await
            .expect("Failed to submit");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "path: {path}");
        let body: Value = resp.json().await.expect("Failed to parse response");
        let details = body["details"].as_array().expect("details expected");
        assert!(
            details
                .iter()
                .any(|entry| entry["field"] == json!(field)
                    && entry["message"] == json!("Invalid email address")),
            "path: {path}"
        );
    }
}

// ============================================================================
// Error Envelope Tests
// ============================================================================

#[tokio::test]
async fn test_unreadable_body_gets_summary_only() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/contact"))
        .header(CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to submit");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], json!("Invalid contact data"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/nope"))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// CORS Tests
// ============================================================================

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .request(Method::OPTIONS, app.url("/api/contact"))
        .header(ORIGIN, "https://securevision.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .expect("Failed to send preflight");

    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
}
