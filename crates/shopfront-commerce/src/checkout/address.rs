//! Shipping address snapshot.

use serde::{Deserialize, Serialize};

/// A shipping address captured during checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingAddress {
    /// Recipient name.
    pub full_name: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Country name.
    pub country: String,
}

impl ShippingAddress {
    /// Create a new address.
    pub fn new(
        full_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            street: street.into(),
            city: city.into(),
            zip: String::new(),
            country: String::new(),
        }
    }

    /// Set the postal code.
    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// An address is complete once street and city are filled in.
    pub fn is_complete(&self) -> bool {
        !self.street.trim().is_empty() && !self.city.trim().is_empty()
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.street.clone(), self.city.clone()];
        if !self.zip.is_empty() {
            parts.push(self.zip.clone());
        }
        if !self.country.is_empty() {
            parts.push(self.country.clone());
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness_requires_street_and_city() {
        assert!(ShippingAddress::new("Ana", "12 Elm St", "Lisbon").is_complete());
        assert!(!ShippingAddress::new("Ana", "", "Lisbon").is_complete());
        assert!(!ShippingAddress::new("Ana", "12 Elm St", "   ").is_complete());
    }

    #[test]
    fn test_one_line() {
        let addr = ShippingAddress::new("Ana", "12 Elm St", "Lisbon")
            .with_zip("1000-001")
            .with_country("Portugal");
        assert_eq!(addr.one_line(), "12 Elm St, Lisbon, 1000-001, Portugal");
    }
}
