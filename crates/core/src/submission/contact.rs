//! Contact-form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ContactId, Email};

use super::{ValidationError, require_email, require_text};

/// Raw contact-form payload, exactly as submitted.
///
/// Every field is optional so a missing field surfaces as a validation
/// message rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl ContactDraft {
    /// Validate the draft into a well-typed contact request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated constraint.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        let mut errors = Vec::new();

        let first_name = require_text(
            "firstName",
            self.first_name,
            "First name is required",
            &mut errors,
        );
        let last_name = require_text(
            "lastName",
            self.last_name,
            "Last name is required",
            &mut errors,
        );
        let email = require_email("email", self.email, &mut errors);
        // Optional and unconstrained: whatever was submitted is stored,
        // absent stays absent.
        let company = self.company;
        let message = require_text("message", self.message, "Message is required", &mut errors);

        match (first_name, last_name, email, message) {
            (Some(first_name), Some(last_name), Some(email), Some(message)) => Ok(NewContact {
                first_name,
                last_name,
                email,
                company,
                message,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

/// A validated contact request, ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub company: Option<String>,
    pub message: String,
}

/// A stored contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    /// Explicit `null` on the wire when not provided.
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
