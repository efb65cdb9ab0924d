//! Storefront domain types and state transitions for Shopfront.
//!
//! This crate is the computational core of the storefront:
//!
//! - **Catalog**: products, ratings, reviews
//! - **Cart**: line items, promo codes, pricing totals
//! - **Checkout**: address capture, the linear step flow, order building
//! - **Orders**: the append-only ledger and its queries
//! - **Wishlist**: the deduplicated favorites set
//! - **Search**: in-memory listing queries with pagination
//!
//! All state types are immutable snapshots: transitions take `&self` and
//! return a fresh value, which keeps the single-writer store discipline
//! trivial to uphold.
//!
//! # Example
//!
//! ```
//! use shopfront_commerce::prelude::*;
//!
//! let mug = Product::new(1, "Mug", Money::from_decimal(2.5, Currency::USD)).with_stock(10);
//! let poster = Product::new(2, "Poster", Money::from_decimal(3.9, Currency::USD)).with_stock(3);
//!
//! let cart = CartState::new()
//!     .add_item(mug, 2)
//!     .unwrap()
//!     .add_item(poster, 1)
//!     .unwrap()
//!     .apply_promo("welcome10")
//!     .unwrap();
//!
//! let totals = cart.totals().unwrap();
//! assert_eq!(totals.subtotal.amount_cents, 890);
//! assert!(totals.total.is_zero());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{avg_rating, Product, Rating, RatingSummary, Review};

    // Cart
    pub use crate::cart::{promo, CartLine, CartState, CartTotals, PromoCode};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep, ShippingAddress};

    // Orders
    pub use crate::orders::{Order, OrderLedger, OrderLine, OrderStatus};

    // Wishlist
    pub use crate::wishlist::WishlistState;

    // Search
    pub use crate::search::{Page, Pagination, ProductQuery, SortOption};
}
