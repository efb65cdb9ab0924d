//! Money type for monetary values.
//!
//! Amounts are stored in cents to keep cart arithmetic exact; the decimal
//! prices the catalog displays are converted at the edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use shopfront_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(2.5, Currency::USD);
    /// assert_eq!(price.amount_cents, 250);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value, returning None if currencies differ
    /// or the addition overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Subtract another value, flooring the result at zero.
    ///
    /// Used for discount math where a discount larger than the subtotal
    /// must never drive the total negative.
    pub fn try_subtract_clamped(&self, other: &Money) -> Option<Money> {
        self.try_subtract(other)
            .map(|m| Money::new(m.amount_cents.max(0), m.currency))
    }

    /// Multiply by a scalar quantity, checking for overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies differ. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("currency mismatch in addition")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        let m = Money::from_decimal(3.9, Currency::USD);
        assert_eq!(m.amount_cents, 390);
        assert!((m.to_decimal() - 3.9).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_try_add() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1500);
        assert_eq!((a + b).amount_cents, 1500);
    }

    #[test]
    #[should_panic(expected = "currency mismatch")]
    fn test_add_operator_panics_on_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let gbp = Money::new(1000, Currency::GBP);
        let _ = usd + gbp;
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    fn test_subtract_clamped_floors_at_zero() {
        let subtotal = Money::new(890, Currency::USD);
        let discount = Money::new(2000, Currency::USD);
        let total = subtotal.try_subtract_clamped(&discount).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_subtract_clamped_normal() {
        let subtotal = Money::new(2000, Currency::USD);
        let discount = Money::new(500, Currency::USD);
        let total = subtotal.try_subtract_clamped(&discount).unwrap();
        assert_eq!(total.amount_cents, 1500);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert!(m.try_multiply(2).is_none());
    }
}
