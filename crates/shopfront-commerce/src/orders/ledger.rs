//! Append-only order ledger.

use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use crate::orders::order::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// History of placed orders, most recent first.
///
/// Like the cart, mutations return fresh snapshots; the store installs
/// them and mirrors the list to storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Prepend a newly placed order.
    pub fn add_order(&self, order: Order) -> OrderLedger {
        let mut next = self.clone();
        next.orders.insert(0, order);
        next
    }

    /// Replace the status of the matching order; no-op when absent.
    pub fn update_status(&self, order_id: &OrderId, status: OrderStatus) -> OrderLedger {
        let mut next = self.clone();
        if let Some(order) = next.orders.iter_mut().find(|o| &o.id == order_id) {
            order.status = status;
        }
        next
    }

    /// Orders currently in the given status.
    pub fn with_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    /// Find an order by id or by order number.
    pub fn find(&self, key: &str) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| o.id.as_str() == key || o.order_number == key)
    }

    /// Sum of order totals across the ledger.
    pub fn total_revenue(&self) -> Result<Money, CommerceError> {
        let currency = self
            .orders
            .first()
            .map(|o| o.total.currency)
            .unwrap_or_default();

        let mut sum = Money::zero(currency);
        for order in &self.orders {
            sum = sum
                .try_add(&order.total)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: order.total.currency.code().to_string(),
                })?;
        }
        Ok(sum)
    }

    /// The `n` most recent orders by placement date, descending.
    pub fn recent(&self, n: usize) -> Vec<&Order> {
        let mut sorted: Vec<&Order> = self.orders.iter().collect();
        sorted.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        sorted.truncate(n);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartState;
    use crate::catalog::Product;
    use crate::money::Currency;

    fn order(price_cents: i64) -> Order {
        let product =
            Product::new(1, "Mug", Money::new(price_cents, Currency::USD)).with_stock(10);
        let cart = CartState::new().add_item(product, 1).unwrap();
        Order::from_cart(&cart, None).unwrap()
    }

    #[test]
    fn test_add_order_prepends() {
        let first = order(100);
        let second = order(200);
        let ledger = OrderLedger::new()
            .add_order(first.clone())
            .add_order(second.clone());

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.orders()[0].id, second.id);
        assert_eq!(ledger.orders()[1].id, first.id);
    }

    #[test]
    fn test_update_status() {
        let order = order(100);
        let id = order.id.clone();
        let ledger = OrderLedger::new().add_order(order);

        let updated = ledger.update_status(&id, OrderStatus::Shipped);
        assert_eq!(updated.orders()[0].status, OrderStatus::Shipped);
        // Original snapshot untouched.
        assert_eq!(ledger.orders()[0].status, OrderStatus::Processing);
    }

    #[test]
    fn test_update_status_absent_is_noop() {
        let ledger = OrderLedger::new().add_order(order(100));
        let missing = OrderId::new("missing");
        assert_eq!(ledger, ledger.update_status(&missing, OrderStatus::Shipped));
    }

    #[test]
    fn test_find_by_id_or_number() {
        let order = order(100);
        let id = order.id.clone();
        let number = order.order_number.clone();
        let ledger = OrderLedger::new().add_order(order);

        assert!(ledger.find(id.as_str()).is_some());
        assert!(ledger.find(&number).is_some());
        assert!(ledger.find("nope").is_none());
    }

    #[test]
    fn test_total_revenue() {
        let ledger = OrderLedger::new()
            .add_order(order(250))
            .add_order(order(750));
        assert_eq!(ledger.total_revenue().unwrap().amount_cents, 1000);
    }

    #[test]
    fn test_total_revenue_empty() {
        assert!(OrderLedger::new().total_revenue().unwrap().is_zero());
    }

    #[test]
    fn test_recent_sorted_descending() {
        let mut old = order(100);
        old.placed_at = 100;
        let mut newer = order(200);
        newer.placed_at = 200;

        // Insert out of date order to exercise the sort.
        let ledger = OrderLedger::new().add_order(newer.clone()).add_order(old);

        let recent = ledger.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, newer.id);
    }

    #[test]
    fn test_with_status() {
        let a = order(100);
        let b = order(200);
        let b_id = b.id.clone();
        let ledger = OrderLedger::new()
            .add_order(a)
            .add_order(b)
            .update_status(&b_id, OrderStatus::Delivered);

        assert_eq!(ledger.with_status(OrderStatus::Processing).len(), 1);
        assert_eq!(ledger.with_status(OrderStatus::Delivered).len(), 1);
        assert!(ledger.with_status(OrderStatus::Cancelled).is_empty());
    }
}
