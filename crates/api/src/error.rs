//! Unified error handling with Sentry integration.
//!
//! Provides the `ApiError` type that maps domain failures onto the wire
//! contract and captures server errors to Sentry before responding. All
//! fallible route handlers return `Result<T, ApiError>`.
//!
//! The wire contract distinguishes three failure shapes:
//! - field validation failure: 400 with the endpoint's summary and one
//!   `{field, message}` detail per violated constraint
//! - undecodable request body or query: 400 with the summary only
//! - storage failure: opaque 500 with the summary only

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use securevision_core::{FieldError, StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed field validation.
    #[error("{summary}")]
    Validation {
        /// Client-facing summary for the endpoint (e.g. "Invalid contact data").
        summary: &'static str,
        #[source]
        source: ValidationError,
    },

    /// Request body could not be decoded as the expected JSON shape.
    #[error("{summary}")]
    UnreadableBody {
        summary: &'static str,
        #[source]
        source: JsonRejection,
    },

    /// Query string could not be decoded as the expected shape.
    #[error("{summary}")]
    UnreadableQuery {
        summary: &'static str,
        #[source]
        source: QueryRejection,
    },

    /// Storage layer failed.
    #[error("{summary}")]
    Internal {
        summary: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// A 400 carrying per-field validation messages.
    #[must_use]
    pub const fn validation(summary: &'static str, source: ValidationError) -> Self {
        Self::Validation { summary, source }
    }

    /// A 400 for a body that never made it past deserialization.
    #[must_use]
    pub const fn unreadable_body(summary: &'static str, source: JsonRejection) -> Self {
        Self::UnreadableBody { summary, source }
    }

    /// A 400 for a query string that never made it past deserialization.
    #[must_use]
    pub const fn unreadable_query(summary: &'static str, source: QueryRejection) -> Self {
        Self::UnreadableQuery { summary, source }
    }

    /// An opaque 500; the source is logged and captured, never sent.
    #[must_use]
    pub const fn internal(summary: &'static str, source: StoreError) -> Self {
        Self::Internal { summary, source }
    }
}

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal { .. }) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match self {
            Self::Validation { summary, source } => {
                tracing::debug!(error = %source, "Submission rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: summary,
                        details: source.errors,
                    }),
                )
                    .into_response()
            }
            Self::UnreadableBody { summary, source } => {
                tracing::debug!(error = %source, "Request body not decodable");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: summary,
                        details: Vec::new(),
                    }),
                )
                    .into_response()
            }
            Self::UnreadableQuery { summary, source } => {
                tracing::debug!(error = %source, "Query string not decodable");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: summary,
                        details: Vec::new(),
                    }),
                )
                    .into_response()
            }
            Self::Internal { summary, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: summary,
                    details: Vec::new(),
                }),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `ApiError`.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
