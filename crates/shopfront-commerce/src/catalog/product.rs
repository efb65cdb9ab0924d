//! Product types.

use crate::catalog::rating::{avg_rating, Rating};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// The cart and wishlist store copies of this value, so historical
/// snapshots stay stable when the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units in stock.
    pub stock: i64,
    /// Stock level at or below which the product counts as low stock.
    pub low_stock_threshold: i64,
    /// Category name.
    pub category: String,
    /// Per-user rating entries.
    pub ratings: Vec<Rating>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new product with empty ratings.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock: 0,
            low_stock_threshold: 5,
            category: String::new(),
            ratings: Vec::new(),
            created_at: current_timestamp(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is at or below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= self.low_stock_threshold
    }

    /// Check if the requested quantity can be fulfilled from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Mean of this product's rating values; 0 when unrated.
    pub fn average_rating(&self) -> f64 {
        avg_rating(&self.ratings)
    }

    /// Record a rating, replacing any earlier rating by the same user.
    pub fn rate(&mut self, rating: Rating) {
        self.ratings.retain(|r| r.user_id != rating.user_id);
        self.ratings.push(rating);
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
