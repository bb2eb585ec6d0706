//! HTTP route handlers for the submission API.
//!
//! # Route Structure
//!
//! ```text
//! POST /api/contact              - Accept a contact form submission
//! GET  /api/contacts             - List stored contacts, newest first
//! POST /api/demo-booking         - Accept a demo booking
//! GET  /api/demo-booking/slots   - Bookable half-hour time slots
//! GET  /api/demo-bookings        - List stored demo bookings, newest first
//! GET  /api/pricing/quote        - Monthly price quote for camera/user counts
//! POST /api/store-registration   - Accept a store registration
//! GET  /api/store-registrations  - List stored registrations, newest first
//!
//! GET  /health                   - Liveness probe
//! GET  /health/ready             - Readiness probe (exercises the store)
//! ```
//!
//! Every `POST` accepts a JSON body, answers `201` with a
//! `{"success": true, ...}` envelope, and reports field-level failures
//! as `400` with an `{"error", "details"}` envelope. Lists return bare
//! JSON arrays.

pub mod contact;
pub mod demo;
pub mod pricing;
pub mod registration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};

use crate::state::AppState;

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit))
        .route("/contacts", get(contact::list))
        .route("/demo-booking", post(demo::submit))
        .route("/demo-booking/slots", get(demo::slots))
        .route("/demo-bookings", get(demo::list))
        .route("/pricing/quote", get(pricing::quote))
        .route("/store-registration", post(registration::submit))
        .route("/store-registrations", get(registration::list))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the submission store answers before returning OK.
/// Returns 503 Service Unavailable if any collection is unreadable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let store = state.store();
    let probes = [
        store.list_contacts().map(|_| ()),
        store.list_demo_bookings().map(|_| ()),
        store.list_store_registrations().map(|_| ()),
    ];

    if probes.iter().all(Result::is_ok) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
