//! Integration tests for demo bookings and the slot grid.

use std::time::Duration;

use reqwest::StatusCode;
use securevision_integration_tests::TestApp;
use serde_json::{Value, json};

fn booking_body(company: &str, cameras: u32) -> Value {
    json!({
        "companyName": company,
        "email": "ops@example.com",
        "numberOfCameras": cameras,
        "selectedDate": "2026-09-01",
        "selectedTime": "10:30"
    })
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[tokio::test]
async fn test_bookings_list_newest_first() {
    let app = TestApp::spawn().await;

    for company in ["First Booked", "Second Booked"] {
        let resp = app
            .client
            .post(app.url("/api/demo-booking"))
            .json(&booking_body(company, 4))
            .send()
            .await
            .expect("Failed to submit booking");
        assert_eq!(resp.status(), StatusCode::CREATED);

        // Keep the two timestamps distinct.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let resp = app
        .client
        .get(app.url("/api/demo-bookings"))
        .send()
        .await
        .expect("Failed to list bookings");

    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = resp.json().await.expect("Failed to parse list");
    let bookings = listed.as_array().expect("list should be an array");
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0]["companyName"], json!("Second Booked"));
    assert_eq!(bookings[1]["companyName"], json!("First Booked"));
}

// ============================================================================
// Camera Count Tests
// ============================================================================

#[tokio::test]
async fn test_zero_cameras_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/demo-booking"))
        .json(&booking_body("Acme Retail", 0))
        .send()
        .await
        .expect("Failed to submit booking");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], json!("Invalid booking data"));
    assert_eq!(body["details"][0]["field"], json!("numberOfCameras"));
    assert_eq!(
        body["details"][0]["message"],
        json!("At least 1 camera is required")
    );
}

#[tokio::test]
async fn test_single_camera_is_accepted() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/demo-booking"))
        .json(&booking_body("Acme Retail", 1))
        .send()
        .await
        .expect("Failed to submit booking");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["booking"]["numberOfCameras"], json!(1));
}

// ============================================================================
// Slot Grid Tests
// ============================================================================

#[tokio::test]
async fn test_slot_grid_covers_the_business_day() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/demo-booking/slots"))
        .send()
        .await
        .expect("Failed to fetch slots");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let slots = body["slots"].as_array().expect("slots should be an array");
    assert_eq!(slots.len(), 18);
    assert_eq!(slots[0], json!("09:00"));
    assert_eq!(slots[17], json!("17:30"));

    // A slot from the grid is accepted by the booking endpoint.
    let slot = slots[3].as_str().expect("slot should be a string");
    let resp = app
        .client
        .post(app.url("/api/demo-booking"))
        .json(&json!({
            "companyName": "Acme Retail",
            "email": "ops@example.com",
            "numberOfCameras": 2,
            "selectedDate": "2026-09-01",
            "selectedTime": slot
        }))
        .send()
        .await
        .expect("Failed to submit booking");
    assert_eq!(resp.status(), StatusCode::CREATED);
}
