//! # Money Module
//!
//! Provides the `Money` type for invoice amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FCFA HAS NO MINOR UNIT                                                 │
//! │                                                                         │
//! │  Every catalog price is a whole number of francs:                      │
//! │    1100 FCFA × 2 = 2200 FCFA                                           │
//! │                                                                         │
//! │  Prices and quantities are integers, so every total is exact.          │
//! │  No rounding step exists anywhere in the pipeline.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use facture_core::money::Money;
//!
//! let price = Money::from_units(1100);
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.to_string(), "2200 FCFA");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

/// Currency label appended to every displayed amount.
pub const CURRENCY_SUFFIX: &str = "FCFA";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole FCFA.
///
/// ## Design Decisions
/// - **i64**: headroom for any quantity × price product
/// - **Saturating arithmetic**: an absurd price pins at `i64::MAX` instead of panicking
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a plain number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, saturating at `i64::MAX`.
    ///
    /// ## Example
    /// ```rust
    /// use facture_core::money::Money;
    ///
    /// let unit_price = Money::from_units(1600);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 4800);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Integer amount followed by the currency label, e.g. `3800 FCFA`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, CURRENCY_SUFFIX)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a line quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(3800).to_string(), "3800 FCFA");
        assert_eq!(Money::from_units(0).to_string(), "0 FCFA");
        assert_eq!(Money::zero().to_string(), "0 FCFA");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1100);
        let b = Money::from_units(1600);

        assert_eq!((a + b).units(), 2700);
        assert_eq!((a * 2).units(), 2200);

        let mut c = a;
        c += b;
        assert_eq!(c.units(), 2700);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_units(i64::MAX / 2);

        assert_eq!(huge.multiply_quantity(3).units(), i64::MAX);
        assert_eq!((huge + huge + huge).units(), i64::MAX);

        let mut acc = huge;
        acc += Money::from_units(i64::MAX);
        assert_eq!(acc.units(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_units(2200), Money::from_units(1600)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.units(), 3800);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_units(1100)).unwrap();
        assert_eq!(json, "1100");
    }
}
