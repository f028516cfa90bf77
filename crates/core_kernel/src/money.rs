//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of rupiah amounts
//! using rust_decimal for precise calculations without floating-point errors.
//! The back office operates in a single currency with whole-unit amounts
//! (no fractional cents exist in this domain).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be positive, got {0}")]
    NotPositive(Decimal),
}

/// A whole-rupiah monetary amount
///
/// Amounts are stored as `Decimal` and normalized to zero decimal places.
/// Signed values are allowed: balances and diagnostics can legitimately
/// go negative even though posted journal amounts must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new amount, truncating any fractional part toward zero
    pub fn new(amount: Decimal) -> Self {
        Self(amount.trunc())
    }

    /// Creates an amount from a whole-rupiah integer
    pub fn from_rupiah(rupiah: i64) -> Self {
        Self(Decimal::new(rupiah, 0))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal value
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Validates that the amount is strictly positive
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NotPositive` for zero or negative amounts.
    pub fn require_positive(&self) -> Result<Self, MoneyError> {
        if self.is_positive() {
            Ok(*self)
        } else {
            Err(MoneyError::NotPositive(self.0))
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp {}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Represents a percentage rate (e.g., the withholding-tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.02 for 2%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.02 for 2%)
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 2.0 for 2%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Applies this rate to an amount, flooring to a whole rupiah
    ///
    /// Flooring matches the original tax computation: 2% of 1,000,000
    /// is exactly 20,000, and any fractional rupiah is dropped.
    pub fn apply_floor(&self, money: &Money) -> Money {
        Money::new((money.amount() * self.value).floor())
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value * dec!(100))
    }
}
