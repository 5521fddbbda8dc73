//! Money type for monetary values.
//!
//! Amounts are stored as integer cents to avoid the floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_checkout::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Whole currency units, fraction truncated (e.g., 2050 cents -> 20).
    pub fn whole_units(&self) -> i64 {
        self.amount_cents / 100
    }

    /// Multiply by a scalar quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor)
    }

    /// Multiply by a decimal factor (e.g., a per-kilogram rate times a
    /// weight), rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::new((self.amount_cents as f64 * factor).round() as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents + other.amount_cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents - other.amount_cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    /// Two-decimal rendering without going through floats (e.g., "49.99").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(10.0);
        assert_eq!(m.amount_cents, 1000);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).to_string(), "49.99");
        assert_eq!(Money::new(500).to_string(), "5.00");
        assert_eq!(Money::new(7).to_string(), "0.07");
        assert_eq!(Money::new(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_money_whole_units_truncates() {
        assert_eq!(Money::new(2099).whole_units(), 20);
        assert_eq!(Money::new(2000).whole_units(), 20);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).amount_cents, 1500);
        assert_eq!((a - b).amount_cents, 500);
        assert_eq!((a * 3).amount_cents, 3000);
    }

    #[test]
    fn test_money_multiply_decimal() {
        // 10.00/kg rate times 2.5kg
        let rate = Money::new(1000);
        assert_eq!(rate.multiply_decimal(2.5).amount_cents, 2500);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::new(100), Money::new(250)].into_iter().sum();
        assert_eq!(total.amount_cents, 350);
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(100) < Money::new(200));
    }

    #[test]
    fn test_money_predicates() {
        assert!(Money::zero().is_zero());
        assert!(Money::new(-1).is_negative());
        assert!(!Money::new(1).is_negative());
        assert!((Money::new(4999).to_decimal() - 49.99).abs() < 1e-9);
    }
}
