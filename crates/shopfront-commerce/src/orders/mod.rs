//! Orders module.
//!
//! Contains the order snapshot types and the append-only ledger.

mod ledger;
mod order;

pub use ledger::OrderLedger;
pub use order::{Order, OrderLine, OrderStatus};
