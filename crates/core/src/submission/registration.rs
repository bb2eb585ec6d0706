//! Store-registration submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, PaymentStatus, StoreRegistrationId};

use super::{ValidationError, require_at_least, require_email, require_text};

/// Raw store-registration payload, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreRegistrationDraft {
    pub store_name: Option<String>,
    pub store_address: Option<String>,
    pub contact_email: Option<String>,
    pub number_of_cameras: Option<u32>,
    pub number_of_users: Option<u32>,
    pub total_price: Option<String>,
}

impl StoreRegistrationDraft {
    /// Validate the draft into a well-typed registration request.
    ///
    /// `totalPrice` is kept as the string the client computed and showed
    /// the visitor; the quote endpoint exists so clients do not invent
    /// their own math, but the stored record preserves what was submitted.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated constraint.
    pub fn validate(self) -> Result<NewStoreRegistration, ValidationError> {
        let mut errors = Vec::new();

        let store_name = require_text(
            "storeName",
            self.store_name,
            "Store name is required",
            &mut errors,
        );
        let store_address = require_text(
            "storeAddress",
            self.store_address,
            "Store address is required",
            &mut errors,
        );
        let contact_email = require_email("contactEmail", self.contact_email, &mut errors);
        let number_of_cameras = require_at_least(
            "numberOfCameras",
            self.number_of_cameras,
            1,
            "At least 1 camera is required",
            &mut errors,
        );
        let number_of_users = require_at_least(
            "numberOfUsers",
            self.number_of_users,
            1,
            "At least 1 user is required",
            &mut errors,
        );
        let total_price = require_text(
            "totalPrice",
            self.total_price,
            "Total price is required",
            &mut errors,
        );

        match (
            store_name,
            store_address,
            contact_email,
            number_of_cameras,
            number_of_users,
            total_price,
        ) {
            (
                Some(store_name),
                Some(store_address),
                Some(contact_email),
                Some(number_of_cameras),
                Some(number_of_users),
                Some(total_price),
            ) => Ok(NewStoreRegistration {
                store_name,
                store_address,
                contact_email,
                number_of_cameras,
                number_of_users,
                total_price,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

/// A validated store-registration request, ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStoreRegistration {
    pub store_name: String,
    pub store_address: String,
    pub contact_email: Email,
    pub number_of_cameras: u32,
    pub number_of_users: u32,
    pub total_price: String,
}

/// A stored store registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRegistration {
    pub id: StoreRegistrationId,
    pub store_name: String,
    pub store_address: String,
    pub contact_email: Email,
    pub number_of_cameras: u32,
    pub number_of_users: u32,
    pub total_price: String,
    /// Always `pending`; no payment integration transitions it.
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}
