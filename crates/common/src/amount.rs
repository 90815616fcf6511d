//! Order amount value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount of an order.
///
/// Backed by a [`Decimal`] so thresholds such as `0.01` and `2500` compare
/// exactly. Stored amounts carry at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of decimal places kept for stored amounts.
    pub const SCALE: u32 = 2;

    /// Creates an amount from a decimal value, unchanged.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from whole currency units.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Creates an amount from cents (e.g., 1050 = 10.50).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, Self::SCALE))
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the smallest amount an order may be created with.
    pub fn minimum() -> Self {
        Self::from_cents(1)
    }

    /// Returns the largest amount an order may be created with: sixteen
    /// integer digits and two decimal places.
    pub fn maximum() -> Self {
        Self::from_cents(999_999_999_999_999_999)
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self(self.0.round_dp(Self::SCALE))
    }

    /// Returns true if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
