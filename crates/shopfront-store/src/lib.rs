//! Central action store and snapshot persistence for Shopfront.
//!
//! The store owns the application state (cart, wishlist, orders, session)
//! and is its single writer: UI intents become [`Action`] values, each
//! dispatch computes a fresh slice snapshot through the pure domain
//! transitions and mirrors it to key-value storage for reload durability.
//!
//! # Example
//!
//! ```
//! use shopfront_commerce::prelude::*;
//! use shopfront_store::{CartAction, MemoryStore, Store};
//!
//! let mut store = Store::open(MemoryStore::new());
//! let mug = Product::new(1, "Mug", Money::new(900, Currency::USD)).with_stock(5);
//!
//! store.dispatch(CartAction::AddItem { product: mug, quantity: 2 }).unwrap();
//! assert_eq!(store.cart().item_count(), 2);
//! ```

mod action;
mod error;
mod kv;
mod store;

pub use action::{Action, CartAction, OrderAction, WishlistAction};
pub use error::StoreError;
pub use kv::{scratch_dir, JsonFileStore, KvStore, KvStoreExt, MemoryStore};
pub use store::{AppState, Store, AUTH_KEY, CART_KEY, ORDERS_KEY, WISHLIST_KEY};
