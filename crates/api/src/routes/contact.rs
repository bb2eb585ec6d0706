//! Contact form submissions.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use securevision_core::{Contact, ContactDraft};
use serde::Serialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

const SUMMARY_INVALID: &str = "Invalid contact data";
const SUMMARY_SAVE_FAILED: &str = "Failed to save contact";
const SUMMARY_FETCH_FAILED: &str = "Failed to fetch contacts";

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub success: bool,
    pub contact: Contact,
}

/// `POST /api/contact`
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactCreated>)> {
    let Json(draft) = body.map_err(|source| ApiError::unreadable_body(SUMMARY_INVALID, source))?;

    let new = draft
        .validate()
        .map_err(|source| ApiError::validation(SUMMARY_INVALID, source))?;

    let contact = state
        .store()
        .create_contact(new)
        .map_err(|source| ApiError::internal(SUMMARY_SAVE_FAILED, source))?;

    tracing::info!(id = %contact.id, email = %contact.email, "Contact request stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            success: true,
            contact,
        }),
    ))
}

/// `GET /api/contacts`
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>> {
    let contacts = state
        .store()
        .list_contacts()
        .map_err(|source| ApiError::internal(SUMMARY_FETCH_FAILED, source))?;

    Ok(Json(contacts))
}
