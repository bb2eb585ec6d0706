//! SecureVision submission API.
//!
//! Serves the marketing-site backend: contact requests, demo bookings,
//! and store registrations, plus the pricing quote and the demo slot
//! grid the forms are built from. Submissions are validated before
//! anything touches storage and kept in an in-memory store behind the
//! [`securevision_core::SubmissionStore`] port.
//!
//! [`app`] builds the full router so tests can drive it without a
//! socket; `main.rs` binds it to one.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storage;

use axum::Router;
use axum::extract::Request;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsOrigin;
use crate::state::AppState;

/// Build the application router with the full middleware stack.
///
/// Layer order matters: the trace layer sits outside the request-id
/// middleware so the span exists when the id is recorded into it, and
/// the Sentry layers are outermost for full request coverage. The rate
/// limiter wraps only `/api`, leaving the health probes unmetered.
pub fn app(state: AppState) -> Router {
    let cors = match state.config().cors_allow_origin {
        CorsOrigin::Any => CorsLayer::permissive(),
        CorsOrigin::Origin(ref origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/health", get(routes::health))
        .route("/health/ready", get(routes::readiness))
        .nest(
            "/api",
            routes::api_routes().layer(middleware::api_rate_limiter()),
        )
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .layer(cors)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
