//! Demo-booking submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DemoBookingId, Email};

use super::{ValidationError, require_at_least, require_email, require_text};

/// Half-hour demo slots offered by the booking form, 09:00 through 17:30.
pub const DEMO_TIME_SLOTS: [&str; 18] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

/// Raw demo-booking payload, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoBookingDraft {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub number_of_cameras: Option<u32>,
    pub selected_date: Option<String>,
    pub selected_time: Option<String>,
}

impl DemoBookingDraft {
    /// Validate the draft into a well-typed booking request.
    ///
    /// The date and time are opaque non-empty strings: the booking form
    /// sends whatever the visitor picked and sales follows up by hand, so
    /// nothing here enforces a calendar format or the slot grid.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated constraint.
    pub fn validate(self) -> Result<NewDemoBooking, ValidationError> {
        let mut errors = Vec::new();

        let company_name = require_text(
            "companyName",
            self.company_name,
            "Company name is required",
            &mut errors,
        );
        let email = require_email("email", self.email, &mut errors);
        let number_of_cameras = require_at_least(
            "numberOfCameras",
            self.number_of_cameras,
            1,
            "At least 1 camera is required",
            &mut errors,
        );
        let selected_date = require_text(
            "selectedDate",
            self.selected_date,
            "Date is required",
            &mut errors,
        );
        let selected_time = require_text(
            "selectedTime",
            self.selected_time,
            "Time is required",
            &mut errors,
        );

        match (
            company_name,
            email,
            number_of_cameras,
            selected_date,
            selected_time,
        ) {
            (
                Some(company_name),
                Some(email),
                Some(number_of_cameras),
                Some(selected_date),
                Some(selected_time),
            ) => Ok(NewDemoBooking {
                company_name,
                email,
                number_of_cameras,
                selected_date,
                selected_time,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

/// A validated demo-booking request, ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDemoBooking {
    pub company_name: String,
    pub email: Email,
    pub number_of_cameras: u32,
    pub selected_date: String,
    pub selected_time: String,
}

/// A stored demo booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoBooking {
    pub id: DemoBookingId,
    pub company_name: String,
    pub email: Email,
    pub number_of_cameras: u32,
    pub selected_date: String,
    pub selected_time: String,
    pub created_at: DateTime<Utc>,
}
