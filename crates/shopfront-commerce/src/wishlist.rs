//! Wishlist snapshot.
//!
//! A deduplicated favorites set in insertion order. Membership checks
//! drive icon state across many independently rendered product cards, so
//! each snapshot carries an id index for O(1) `is_wishlisted` lookups;
//! the index is rebuilt when a snapshot is deserialized.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The wishlist snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct WishlistState {
    items: Vec<Product>,
    index: HashSet<ProductId>,
}

impl WishlistState {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wishlisted products in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership predicate.
    pub fn is_wishlisted(&self, product_id: ProductId) -> bool {
        self.index.contains(&product_id)
    }

    /// Add a product; no-op when its id is already present.
    pub fn add(&self, product: Product) -> WishlistState {
        if self.is_wishlisted(product.id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.index.insert(product.id);
        next.items.push(product);
        next
    }

    /// Remove a product by id; no-op when absent.
    pub fn remove(&self, product_id: ProductId) -> WishlistState {
        let mut next = self.clone();
        next.index.remove(&product_id);
        next.items.retain(|p| p.id != product_id);
        next
    }

    /// Remove the product when present, add it otherwise.
    pub fn toggle(&self, product: Product) -> WishlistState {
        if self.is_wishlisted(product.id) {
            self.remove(product.id)
        } else {
            self.add(product)
        }
    }
}

impl From<Vec<Product>> for WishlistState {
    fn from(items: Vec<Product>) -> Self {
        // Deduplicate by id, keeping first occurrence.
        let mut state = WishlistState::new();
        let mut deduped = Vec::with_capacity(items.len());
        for product in items {
            if state.index.insert(product.id) {
                deduped.push(product);
            }
        }
        state.items = deduped;
        state
    }
}

impl From<WishlistState> for Vec<Product> {
    fn from(state: WishlistState) -> Self {
        state.items
    }
}
