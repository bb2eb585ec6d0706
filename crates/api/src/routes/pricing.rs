//! Monthly pricing quotes.
//!
//! The registration form shows a live total as the visitor adjusts
//! camera and user counts; this endpoint is the server-side source for
//! that number so the frontend never hardcodes the rates.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use securevision_core::{FieldError, ValidationError, monthly_quote};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ApiError, Result};

const SUMMARY_INVALID: &str = "Invalid quote parameters";

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub cameras: u32,
    pub users: u32,
}

/// Wire shape of a quote. Amounts are decimal strings so clients never
/// see float artifacts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub number_of_cameras: u32,
    pub number_of_users: u32,
    pub camera_subtotal: String,
    pub user_subtotal: String,
    pub total_price: String,
    pub currency: &'static str,
}

/// `GET /api/pricing/quote?cameras=N&users=M`
#[instrument(skip_all)]
pub async fn quote(
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<Json<QuoteResponse>> {
    let Query(params) =
        params.map_err(|source| ApiError::unreadable_query(SUMMARY_INVALID, source))?;

    let mut errors = Vec::new();
    if params.cameras < 1 {
        errors.push(FieldError {
            field: "cameras",
            message: "At least 1 camera is required",
        });
    }
    if params.users < 1 {
        errors.push(FieldError {
            field: "users",
            message: "At least 1 user is required",
        });
    }
    if !errors.is_empty() {
        return Err(ApiError::validation(
            SUMMARY_INVALID,
            ValidationError::new(errors),
        ));
    }

    let quote = monthly_quote(params.cameras, params.users);

    Ok(Json(QuoteResponse {
        number_of_cameras: quote.cameras,
        number_of_users: quote.users,
        camera_subtotal: quote.camera_subtotal.amount.to_string(),
        user_subtotal: quote.user_subtotal.amount.to_string(),
        total_price: quote.total.amount.to_string(),
        currency: quote.total.currency_code.code(),
    }))
}
