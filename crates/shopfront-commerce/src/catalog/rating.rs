//! Ratings and reviews.

use crate::ids::{ProductId, ReviewId, UserId};
use serde::{Deserialize, Serialize};

/// A single per-user rating entry on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// User who left the rating.
    pub user_id: UserId,
    /// Rating value (1.0 - 5.0).
    pub value: f64,
}

impl Rating {
    pub fn new(user_id: UserId, value: f64) -> Self {
        Self { user_id, value }
    }
}

/// Arithmetic mean of rating values; 0 for an empty list.
pub fn avg_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().map(|r| r.value).sum::<f64>() / ratings.len() as f64
}

/// Aggregated rating figures for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingSummary {
    /// Product these figures describe.
    pub product_id: ProductId,
    /// Mean rating value.
    pub average: f64,
    /// Number of ratings.
    pub total: u32,
    /// Count of ratings per star level, index 0 = one star.
    pub stars: [u32; 5],
}

impl RatingSummary {
    /// Build a summary from a product's rating entries.
    pub fn from_ratings(product_id: ProductId, ratings: &[Rating]) -> Self {
        let mut stars = [0u32; 5];
        for r in ratings {
            let level = (r.value.round() as i64).clamp(1, 5) as usize;
            stars[level - 1] += 1;
        }
        Self {
            product_id,
            average: avg_rating(ratings),
            total: ratings.len() as u32,
            stars,
        }
    }

    /// Share of ratings at the given star level, as a percentage.
    pub fn percentage(&self, star: u8) -> f64 {
        if self.total == 0 || !(1..=5).contains(&star) {
            return 0.0;
        }
        self.stars[star as usize - 1] as f64 / self.total as f64 * 100.0
    }
}

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Display name of the author.
    pub author: String,
    /// Star rating (1 - 5).
    pub rating: u8,
    /// Review title.
    pub title: String,
    /// Review body.
    pub body: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Review {
    /// Create a new review, clamping the rating into 1..=5.
    pub fn new(
        product_id: ProductId,
        author: impl Into<String>,
        rating: u8,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: ReviewId::generate(),
            product_id,
            author: author.into(),
            rating: rating.clamp(1, 5),
            title: title.into(),
            body: body.into(),
            created_at: current_timestamp(),
        }
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
