//! Form submission payloads and their validation.
//!
//! Each submission kind comes in three shapes: a `*Draft` deserialized
//! straight from an untrusted request body (every field optional), a `New*`
//! produced by validating a draft (well-typed, constraint-satisfying), and
//! the stored record type returned by the storage layer with its generated
//! identifier and creation timestamp.
//!
//! Validation is pure: it either returns the typed input or a
//! [`ValidationError`] carrying one [`FieldError`] per violated constraint,
//! named by the wire-facing (camelCase) field. All violations are collected
//! in a single pass so a caller can fix a form in one round trip.
//!
//! Accepted input passes through untouched. Validation counts characters
//! and checks structure; it never trims, collapses, or otherwise rewrites
//! what the caller sent, and the stored record echoes the submission
//! byte for byte.

pub mod contact;
pub mod demo;
pub mod registration;

pub use contact::{Contact, ContactDraft, NewContact};
pub use demo::{DEMO_TIME_SLOTS, DemoBooking, DemoBookingDraft, NewDemoBooking};
pub use registration::{NewStoreRegistration, StoreRegistration, StoreRegistrationDraft};

use serde::Serialize;

use crate::types::Email;

const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Invalid email address";

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire-facing (camelCase) name of the offending field.
    pub field: &'static str,
    /// User-facing description of the violated constraint.
    pub message: &'static str,
}

/// Rejection of a submission draft, one message per violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission failed validation on {} field(s)", errors.len())]
pub struct ValidationError {
    /// Every violated constraint, in field declaration order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wrap a non-empty list of field errors.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// Require a text field to be present with at least one character.
///
/// Pushes `message` for the field and yields `None` when the requirement
/// is not met; otherwise yields the value exactly as submitted. The check
/// counts characters, nothing more: a whitespace-only value passes, and
/// accepted values are never trimmed or rewritten.
fn require_text(
    field: &'static str,
    value: Option<String>,
    message: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            errors.push(FieldError { field, message });
            None
        }
    }
}

/// Require a present, syntactically valid email field.
///
/// The raw value goes straight to [`Email::parse`], so a padded address
/// is reported as invalid rather than cleaned up.
fn require_email(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<Email> {
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            errors.push(FieldError {
                field,
                message: EMAIL_REQUIRED,
            });
            return None;
        }
    };

    match Email::parse(&value) {
        Ok(email) => Some(email),
        Err(_) => {
            errors.push(FieldError {
                field,
                message: EMAIL_INVALID,
            });
            None
        }
    }
}

/// Require an integer field to be present and at least `min`.
fn require_at_least(
    field: &'static str,
    value: Option<u32>,
    min: u32,
    message: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    match value {
        Some(v) if v >= min => Some(v),
        _ => {
            errors.push(FieldError { field, message });
            None
        }
    }
}
