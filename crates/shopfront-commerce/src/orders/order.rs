//! Order types.

use crate::cart::CartState;
use crate::checkout::ShippingAddress;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Progresses linearly Processing -> Shipped -> Delivered; Cancelled is a
/// terminal side branch reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, being prepared.
    #[default]
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if an order in this status can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }

    /// The next status in the linear progression, if any.
    pub fn advance(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

/// A line snapshot within an order.
///
/// Decoupled from the live product so historical orders stay stable when
/// catalog prices change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product id at the time of order.
    pub product_id: ProductId,
    /// Product name at the time of order.
    pub name: String,
    /// Unit price at the time of order.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: i64,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Unix timestamp of placement.
    pub placed_at: i64,
    /// Order status.
    pub status: OrderStatus,
    /// Line snapshots.
    pub lines: Vec<OrderLine>,
    /// Subtotal before the discount.
    pub subtotal: Money,
    /// Discount applied.
    pub discount: Money,
    /// Total charged.
    pub total: Money,
    /// Shipping address snapshot.
    pub shipping_address: Option<ShippingAddress>,
}

impl Order {
    /// Build an order from a cart snapshot.
    pub fn from_cart(
        cart: &CartState,
        shipping_address: Option<ShippingAddress>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let totals = cart.totals()?;
        let lines = cart
            .lines
            .iter()
            .map(|l| OrderLine {
                product_id: l.product.id,
                name: l.product.name.clone(),
                unit_price: l.product.price,
                quantity: l.quantity,
            })
            .collect();

        Ok(Self {
            id: OrderId::generate(),
            order_number: generate_order_number(),
            placed_at: current_timestamp(),
            status: OrderStatus::Processing,
            lines,
            subtotal: totals.subtotal,
            discount: totals.discount,
            total: totals.total,
            shipping_address,
        })
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cancel the order if its status still allows it.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        true
    }
}

/// Generate a human-readable order number.
fn generate_order_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("ORD-{}-{:04}", current_timestamp(), counter % 10_000)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Currency;

    fn cart() -> CartState {
        let a = Product::new(1, "Mug", Money::new(250, Currency::USD)).with_stock(10);
        let b = Product::new(2, "Poster", Money::new(390, Currency::USD)).with_stock(10);
        CartState::new()
            .add_item(a, 2)
            .unwrap()
            .add_item(b, 1)
            .unwrap()
    }

    #[test]
    fn test_from_cart_snapshots_lines() {
        let order = Order::from_cart(&cart(), None).unwrap();

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.subtotal.amount_cents, 890);
        assert_eq!(order.total.amount_cents, 890);
        assert!(order.order_number.starts_with("ORD-"));
    }

    #[test]
    fn test_from_empty_cart_fails() {
        let err = Order::from_cart(&CartState::new(), None).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_status_progression() {
        assert_eq!(OrderStatus::Processing.advance(), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::Shipped.advance(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.advance(), None);
        assert_eq!(OrderStatus::Cancelled.advance(), None);
    }

    #[test]
    fn test_cancel_rules() {
        let mut order = Order::from_cart(&cart(), None).unwrap();
        assert!(order.cancel());
        assert_eq!(order.status, OrderStatus::Cancelled);
        // Cancelled is terminal.
        assert!(!order.cancel());
    }

    #[test]
    fn test_order_numbers_unique() {
        let a = Order::from_cart(&cart(), None).unwrap();
        let b = Order::from_cart(&cart(), None).unwrap();
        assert_ne!(a.order_number, b.order_number);
    }
}
