//! Dispatched actions.
//!
//! One sum type per state slice, matched exhaustively; applying an action
//! delegates to the pure domain transitions and yields the next snapshot.

use shopfront_commerce::cart::CartState;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::ids::{OrderId, ProductId};
use shopfront_commerce::orders::{Order, OrderLedger, OrderStatus};
use shopfront_commerce::wishlist::WishlistState;
use shopfront_commerce::CommerceError;

/// Cart slice actions.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a product to the cart.
    AddItem { product: Product, quantity: i64 },
    /// Remove a product's line.
    RemoveItem(ProductId),
    /// Replace a line's quantity; non-positive removes the line.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart and reset promo state.
    Clear,
    /// Apply a promo code.
    ApplyPromo(String),
}

impl CartAction {
    /// Apply to a cart snapshot, producing the next snapshot.
    pub fn apply(self, cart: &CartState) -> Result<CartState, CommerceError> {
        match self {
            CartAction::AddItem { product, quantity } => cart.add_item(product, quantity),
            CartAction::RemoveItem(product_id) => Ok(cart.remove_item(product_id)),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => Ok(cart.update_quantity(product_id, quantity)),
            CartAction::Clear => Ok(cart.clear()),
            CartAction::ApplyPromo(code) => cart.apply_promo(&code),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "cart.add_item",
            CartAction::RemoveItem(_) => "cart.remove_item",
            CartAction::UpdateQuantity { .. } => "cart.update_quantity",
            CartAction::Clear => "cart.clear",
            CartAction::ApplyPromo(_) => "cart.apply_promo",
        }
    }
}

/// Wishlist slice actions.
#[derive(Debug, Clone)]
pub enum WishlistAction {
    /// Add a product; no-op when already present.
    Add(Product),
    /// Remove a product by id.
    Remove(ProductId),
    /// Add when absent, remove when present.
    Toggle(Product),
}

impl WishlistAction {
    /// Apply to a wishlist snapshot. Wishlist transitions never fail.
    pub fn apply(self, wishlist: &WishlistState) -> WishlistState {
        match self {
            WishlistAction::Add(product) => wishlist.add(product),
            WishlistAction::Remove(product_id) => wishlist.remove(product_id),
            WishlistAction::Toggle(product) => wishlist.toggle(product),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            WishlistAction::Add(_) => "wishlist.add",
            WishlistAction::Remove(_) => "wishlist.remove",
            WishlistAction::Toggle(_) => "wishlist.toggle",
        }
    }
}

/// Orders slice actions.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Append a placed order.
    Add(Order),
    /// Replace the status of an order; no-op when absent.
    UpdateStatus {
        order_id: OrderId,
        status: OrderStatus,
    },
}

impl OrderAction {
    /// Apply to a ledger snapshot. Ledger transitions never fail.
    pub fn apply(self, ledger: &OrderLedger) -> OrderLedger {
        match self {
            OrderAction::Add(order) => ledger.add_order(order),
            OrderAction::UpdateStatus { order_id, status } => {
                ledger.update_status(&order_id, status)
            }
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderAction::Add(_) => "orders.add",
            OrderAction::UpdateStatus { .. } => "orders.update_status",
        }
    }
}

/// A dispatched action, routed to one slice.
#[derive(Debug, Clone)]
pub enum Action {
    Cart(CartAction),
    Wishlist(WishlistAction),
    Orders(OrderAction),
}

impl Action {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Cart(a) => a.kind(),
            Action::Wishlist(a) => a.kind(),
            Action::Orders(a) => a.kind(),
        }
    }
}

impl From<CartAction> for Action {
    fn from(a: CartAction) -> Self {
        Action::Cart(a)
    }
}

impl From<WishlistAction> for Action {
    fn from(a: WishlistAction) -> Self {
        Action::Wishlist(a)
    }
}

impl From<OrderAction> for Action {
    fn from(a: OrderAction) -> Self {
        Action::Orders(a)
    }
}
