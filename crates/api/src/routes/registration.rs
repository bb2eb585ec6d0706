//! Store registration submissions.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use securevision_core::{StoreRegistration, StoreRegistrationDraft};
use serde::Serialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

const SUMMARY_INVALID: &str = "Invalid registration data";
const SUMMARY_SAVE_FAILED: &str = "Failed to save registration";
const SUMMARY_FETCH_FAILED: &str = "Failed to fetch registrations";

#[derive(Debug, Serialize)]
pub struct StoreRegistrationCreated {
    pub success: bool,
    pub registration: StoreRegistration,
}

/// `POST /api/store-registration`
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<StoreRegistrationDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<StoreRegistrationCreated>)> {
    let Json(draft) = body.map_err(|source| ApiError::unreadable_body(SUMMARY_INVALID, source))?;

    let new = draft
        .validate()
        .map_err(|source| ApiError::validation(SUMMARY_INVALID, source))?;

    let registration = state
        .store()
        .create_store_registration(new)
        .map_err(|source| ApiError::internal(SUMMARY_SAVE_FAILED, source))?;

    tracing::info!(
        id = %registration.id,
        store = %registration.store_name,
        cameras = registration.number_of_cameras,
        "Store registration stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(StoreRegistrationCreated {
            success: true,
            registration,
        }),
    ))
}

/// `GET /api/store-registrations`
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StoreRegistration>>> {
    let registrations = state
        .store()
        .list_store_registrations()
        .map_err(|source| ApiError::internal(SUMMARY_FETCH_FAILED, source))?;

    Ok(Json(registrations))
}
