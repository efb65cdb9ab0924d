//! Promo code lookup.
//!
//! Codes map to flat discount amounts through a static table; matching is
//! case-insensitive and the canonical (uppercase) form is what gets stored
//! on the cart.

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Redeemable codes and their flat discount amounts in cents.
const PROMO_TABLE: &[(&str, i64)] = &[
    ("SUMMER2025", 2000),
    ("WELCOME10", 1000),
    ("ANGULAR", 5000),
];

/// A validated promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCode {
    /// Canonical (uppercased) code.
    pub code: String,
    /// Flat discount amount in cents.
    pub amount_cents: i64,
}

impl PromoCode {
    /// The discount as money in the given currency.
    pub fn discount(&self, currency: Currency) -> Money {
        Money::new(self.amount_cents, currency)
    }
}

/// Look up a code, uppercasing it first.
pub fn lookup(code: &str) -> Option<PromoCode> {
    let canonical = code.trim().to_uppercase();
    PROMO_TABLE
        .iter()
        .find(|(c, _)| *c == canonical)
        .map(|(c, amount)| PromoCode {
            code: (*c).to_string(),
            amount_cents: *amount,
        })
}

/// Validate a code, failing with `InvalidPromoCode` on a miss.
pub fn validate(code: &str) -> Result<PromoCode, CommerceError> {
    lookup(code).ok_or_else(|| CommerceError::InvalidPromoCode(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lower = lookup("welcome10").unwrap();
        let upper = lookup("WELCOME10").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.code, "WELCOME10");
        assert_eq!(lower.amount_cents, 1000);
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("bogus").is_none());
    }

    #[test]
    fn test_validate_reports_submitted_code() {
        let err = validate("bogus").unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPromoCode(c) if c == "bogus"));
    }

    #[test]
    fn test_discount_currency() {
        let promo = lookup("SUMMER2025").unwrap();
        let discount = promo.discount(Currency::USD);
        assert_eq!(discount.amount_cents, 2000);
        assert_eq!(discount.currency, Currency::USD);
    }
}
