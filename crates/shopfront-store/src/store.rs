//! The central store.
//!
//! Owns the application state and is its only writer: every mutation goes
//! through [`Store::dispatch`], which computes the next snapshot via the
//! pure domain transitions, installs it, and mirrors the touched slice to
//! storage under its fixed key.

use crate::action::{Action, CartAction, OrderAction, WishlistAction};
use crate::kv::{KvStore, KvStoreExt};
use crate::StoreError;
use serde::de::DeserializeOwned;
use shopfront_auth::TokenPair;
use shopfront_commerce::cart::CartState;
use shopfront_commerce::orders::{Order, OrderLedger};
use shopfront_commerce::wishlist::WishlistState;
use tracing::{debug, info, warn};

/// Storage key for the cart snapshot.
pub const CART_KEY: &str = "cart";
/// Storage key for the wishlist snapshot.
pub const WISHLIST_KEY: &str = "wishlist";
/// Storage key for the order ledger.
pub const ORDERS_KEY: &str = "orders";
/// Storage key for the auth token pair.
pub const AUTH_KEY: &str = "auth";

/// The complete application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Cart slice.
    pub cart: CartState,
    /// Wishlist slice.
    pub wishlist: WishlistState,
    /// Orders slice.
    pub orders: OrderLedger,
    /// Current session tokens, if signed in.
    pub session: Option<TokenPair>,
}

/// The single-writer store over a key-value storage backend.
#[derive(Debug)]
pub struct Store<S: KvStore> {
    state: AppState,
    storage: S,
}

impl<S: KvStore> Store<S> {
    /// Open the store, seeding each slice from storage.
    ///
    /// A missing key yields the empty state; an unreadable snapshot is
    /// discarded with a warning rather than surfaced, so a corrupt file
    /// can never brick the session.
    pub fn open(storage: S) -> Self {
        let state = AppState {
            cart: restore_slice(&storage, CART_KEY),
            wishlist: restore_slice(&storage, WISHLIST_KEY),
            orders: restore_slice(&storage, ORDERS_KEY),
            session: restore_slice(&storage, AUTH_KEY),
        };
        debug!(
            cart_items = state.cart.item_count(),
            wishlist_items = state.wishlist.len(),
            orders = state.orders.len(),
            "store opened"
        );
        Self { state, storage }
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> &CartState {
        &self.state.cart
    }

    /// Current wishlist snapshot.
    pub fn wishlist(&self) -> &WishlistState {
        &self.state.wishlist
    }

    /// Current order ledger.
    pub fn orders(&self) -> &OrderLedger {
        &self.state.orders
    }

    /// Current session tokens.
    pub fn session(&self) -> Option<&TokenPair> {
        self.state.session.as_ref()
    }

    /// Dispatch an action through the matching slice.
    ///
    /// On failure the previous snapshot stays installed and nothing is
    /// written to storage.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> Result<(), StoreError> {
        let action = action.into();
        debug!(action = action.kind(), "dispatch");

        match action {
            Action::Cart(a) => {
                let next = a.apply(&self.state.cart)?;
                self.storage.set(CART_KEY, &next)?;
                self.state.cart = next;
            }
            Action::Wishlist(a) => {
                let next = a.apply(&self.state.wishlist);
                self.storage.set(WISHLIST_KEY, &next)?;
                self.state.wishlist = next;
            }
            Action::Orders(a) => {
                let next = a.apply(&self.state.orders);
                self.storage.set(ORDERS_KEY, &next)?;
                self.state.orders = next;
            }
        }
        Ok(())
    }

    /// Record a successful checkout: append the order and clear the cart,
    /// persisting both slices.
    pub fn complete_checkout(&mut self, order: Order) -> Result<(), StoreError> {
        info!(order_number = %order.order_number, total = %order.total, "order placed");
        self.dispatch(OrderAction::Add(order))?;
        self.dispatch(CartAction::Clear)?;
        Ok(())
    }

    /// Install and persist a signed-in session.
    pub fn set_session(&mut self, tokens: TokenPair) -> Result<(), StoreError> {
        self.storage.set(AUTH_KEY, &tokens)?;
        self.state.session = Some(tokens);
        Ok(())
    }

    /// Drop the session and remove it from storage.
    pub fn clear_session(&mut self) -> Result<(), StoreError> {
        self.storage.delete(AUTH_KEY)?;
        self.state.session = None;
        Ok(())
    }
}

/// Read a slice from storage, falling back to its default on a missing
/// key or an unreadable snapshot.
fn restore_slice<S: KvStore, T: DeserializeOwned + Default>(storage: &S, key: &str) -> T {
    match storage.get::<T>(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable snapshot");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use shopfront_commerce::catalog::Product;
    use shopfront_commerce::ids::ProductId;
    use shopfront_commerce::money::{Currency, Money};

    fn product(id: i64, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(price_cents, Currency::USD))
            .with_stock(10)
    }

    #[test]
    fn test_dispatch_persists_cart() {
        let mut store = Store::open(MemoryStore::new());
        store
            .dispatch(CartAction::AddItem {
                product: product(1, 250),
                quantity: 2,
            })
            .unwrap();

        assert_eq!(store.cart().item_count(), 2);

        let persisted: CartState = store.storage.get(CART_KEY).unwrap().unwrap();
        assert_eq!(&persisted, store.cart());
    }

    #[test]
    fn test_failed_dispatch_leaves_state_and_storage() {
        let mut store = Store::open(MemoryStore::new());
        let err = store.dispatch(CartAction::ApplyPromo("bogus".to_string()));

        assert!(err.is_err());
        assert!(store.cart().promo_code.is_none());
        assert!(!store.storage.exists(CART_KEY).unwrap());
    }

    #[test]
    fn test_wishlist_dispatch() {
        let mut store = Store::open(MemoryStore::new());
        store
            .dispatch(WishlistAction::Toggle(product(1, 250)))
            .unwrap();
        assert!(store.wishlist().is_wishlisted(ProductId::new(1)));

        store
            .dispatch(WishlistAction::Toggle(product(1, 250)))
            .unwrap();
        assert!(!store.wishlist().is_wishlisted(ProductId::new(1)));
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_empty() {
        let storage = MemoryStore::new();
        storage.set_raw(CART_KEY, "{not json").unwrap();

        let store = Store::open(storage);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_session_roundtrip() {
        let mut store = Store::open(MemoryStore::new());
        assert!(store.session().is_none());

        let tokens = TokenPair::issue("u1".into());
        store.set_session(tokens.clone()).unwrap();
        assert_eq!(store.session(), Some(&tokens));

        store.clear_session().unwrap();
        assert!(store.session().is_none());
        assert!(!store.storage.exists(AUTH_KEY).unwrap());
    }
}
