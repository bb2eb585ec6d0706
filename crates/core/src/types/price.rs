//! Type-safe price representation using decimal arithmetic.
//!
//! Plan pricing is flat-rate per unit: every connected camera and every
//! staff seat adds a fixed monthly amount. [`monthly_quote`] is the single
//! place that math lives so the API and its tests cannot drift apart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly rate per connected camera, in whole USD.
pub const CAMERA_MONTHLY_USD: i64 = 49;

/// Monthly rate per staff user seat, in whole USD.
pub const USER_MONTHLY_USD: i64 = 19;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

/// An itemized monthly quote for a camera/user plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Number of cameras the quote covers.
    pub cameras: u32,
    /// Number of user seats the quote covers.
    pub users: u32,
    /// Cameras line item (cameras x per-camera rate).
    pub camera_subtotal: Price,
    /// User seats line item (users x per-seat rate).
    pub user_subtotal: Price,
    /// Sum of both line items.
    pub total: Price,
}

/// Price a plan for the given number of cameras and user seats.
///
/// Subtotals are exact decimal products of the per-unit monthly rates;
/// the total is their sum. Currency is always USD.
#[must_use]
pub fn monthly_quote(cameras: u32, users: u32) -> Quote {
    let camera_subtotal = Decimal::from(CAMERA_MONTHLY_USD) * Decimal::from(cameras);
    let user_subtotal = Decimal::from(USER_MONTHLY_USD) * Decimal::from(users);
    let total = camera_subtotal + user_subtotal;

    Quote {
        cameras,
        users,
        camera_subtotal: Price::new(camera_subtotal, CurrencyCode::USD),
        user_subtotal: Price::new(user_subtotal, CurrencyCode::USD),
        total: Price::new(total, CurrencyCode::USD),
    }
}
