//! Demo booking submissions and the bookable slot grid.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use securevision_core::{DEMO_TIME_SLOTS, DemoBooking, DemoBookingDraft};
use serde::Serialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

const SUMMARY_INVALID: &str = "Invalid booking data";
const SUMMARY_SAVE_FAILED: &str = "Failed to save booking";
const SUMMARY_FETCH_FAILED: &str = "Failed to fetch bookings";

#[derive(Debug, Serialize)]
pub struct DemoBookingCreated {
    pub success: bool,
    pub booking: DemoBooking,
}

#[derive(Debug, Serialize)]
pub struct DemoSlots {
    pub slots: Vec<&'static str>,
}

/// `POST /api/demo-booking`
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<DemoBookingDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<DemoBookingCreated>)> {
    let Json(draft) = body.map_err(|source| ApiError::unreadable_body(SUMMARY_INVALID, source))?;

    let new = draft
        .validate()
        .map_err(|source| ApiError::validation(SUMMARY_INVALID, source))?;

    let booking = state
        .store()
        .create_demo_booking(new)
        .map_err(|source| ApiError::internal(SUMMARY_SAVE_FAILED, source))?;

    tracing::info!(
        id = %booking.id,
        company = %booking.company_name,
        date = %booking.selected_date,
        "Demo booking stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(DemoBookingCreated {
            success: true,
            booking,
        }),
    ))
}

/// `GET /api/demo-bookings`
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DemoBooking>>> {
    let bookings = state
        .store()
        .list_demo_bookings()
        .map_err(|source| ApiError::internal(SUMMARY_FETCH_FAILED, source))?;

    Ok(Json(bookings))
}

/// `GET /api/demo-booking/slots`
///
/// The half-hour grid the booking form offers. Static for now; kept
/// behind an endpoint so the frontend stops hardcoding it.
#[instrument(skip_all)]
pub async fn slots() -> Json<DemoSlots> {
    Json(DemoSlots {
        slots: DEMO_TIME_SLOTS.to_vec(),
    })
}
