//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Order not found in the ledger.
    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// Invalid quantity for a cart operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Promo code is not in the redeemable set.
    #[error("invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Checkout attempted against an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Shipping address is missing or lacks street/city.
    #[error("shipping address is incomplete")]
    IncompleteAddress,

    /// Requested quantity exceeds available stock.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Currency mismatch in a money calculation.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Whether the failure is recoverable by retrying the same submission.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CommerceError::InsufficientStock { .. })
    }
}
