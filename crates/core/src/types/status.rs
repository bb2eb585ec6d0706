//! Status enums for stored records.

use serde::{Deserialize, Serialize};

/// Payment status carried by a store registration.
///
/// Registrations are created `pending` and stay that way: checkout on the
/// marketing site is simulated, and no payment integration exists that
/// could move a registration into a paid or failed state. The enum still
/// gives the wire contract a closed value set instead of a free-form
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
}

impl PaymentStatus {
    /// The wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        assert_eq!(PaymentStatus::default().as_str(), "pending");
    }
}
