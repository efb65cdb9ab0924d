//! Cart snapshot and its pure transitions.
//!
//! Every transition takes `&self` and returns a fresh snapshot; the caller
//! (the store) installs the result and mirrors it to storage. Invariants
//! held by construction: at most one line per product id, no line with a
//! non-positive quantity, and a non-zero discount only while a promo code
//! is present.

use crate::cart::pricing::CartTotals;
use crate::cart::promo;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Quantity, always positive.
    pub quantity: i64,
}

impl CartLine {
    /// Total price for this line (unit price times quantity).
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Line items in insertion order.
    pub lines: Vec<CartLine>,
    /// Active promo code, canonical form.
    pub promo_code: Option<String>,
    /// Flat discount amount; zero when no code is active.
    pub discount: Money,
    /// Cart currency.
    pub currency: Currency,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            promo_code: None,
            discount: Money::zero(Currency::USD),
            currency: Currency::USD,
        }
    }

    /// Add a product, merging into an existing line for the same id.
    pub fn add_item(&self, product: Product, quantity: i64) -> Result<CartState, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
        } else {
            next.lines.push(CartLine { product, quantity });
        }
        Ok(next)
    }

    /// Remove the line for a product; no-op when absent.
    pub fn remove_item(&self, product_id: ProductId) -> CartState {
        let mut next = self.clone();
        next.lines.retain(|l| l.product.id != product_id);
        next
    }

    /// Replace a line's quantity; a non-positive quantity removes the line.
    /// No-op when the product is absent.
    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) -> CartState {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
        next
    }

    /// Empty the cart and reset promo state.
    pub fn clear(&self) -> CartState {
        let mut next = Self::new();
        next.currency = self.currency;
        next
    }

    /// Apply a promo code, leaving the snapshot untouched on a miss.
    pub fn apply_promo(&self, code: &str) -> Result<CartState, CommerceError> {
        let promo = promo::validate(code)?;
        let mut next = self.clone();
        next.discount = promo.discount(self.currency);
        next.promo_code = Some(promo.code);
        Ok(next)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Compute subtotal, discount, and the zero-clamped total.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        let mut subtotal = Money::zero(self.currency);
        for line in &self.lines {
            let line_total = line.total()?;
            subtotal = subtotal
                .try_add(&line_total)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: line_total.currency.code().to_string(),
                })?;
        }

        let total = subtotal
            .try_subtract_clamped(&self.discount)
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: self.discount.currency.code().to_string(),
            })?;

        Ok(CartTotals {
            subtotal,
            discount: self.discount,
            total,
        })
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
