//! Checkout flow state machine.
//!
//! Three ordered steps, each gated by a precondition checked on entry.
//! Requesting a step whose precondition fails lands on the earliest unmet
//! step instead; nothing here errors on navigation.

use crate::cart::CartState;
use crate::checkout::ShippingAddress;
use crate::error::CommerceError;
use crate::orders::Order;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Cart summary.
    #[default]
    Summary,
    /// Shipping address capture.
    Address,
    /// Final review and submission.
    Confirm,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Summary => "summary",
            CheckoutStep::Address => "address",
            CheckoutStep::Confirm => "confirm",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Summary => 1,
            CheckoutStep::Address => 2,
            CheckoutStep::Confirm => 3,
        }
    }
}

/// Checkout wizard state.
///
/// Holds the captured address until the order is placed; the cart itself
/// lives in the central store and is passed in per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping_address: Option<ShippingAddress>,
}

impl CheckoutFlow {
    /// Start a new flow at the summary step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The captured shipping address, if any.
    pub fn shipping_address(&self) -> Option<&ShippingAddress> {
        self.shipping_address.as_ref()
    }

    /// Check whether a step's entry precondition holds.
    pub fn can_enter(&self, step: CheckoutStep, cart: &CartState) -> bool {
        match step {
            CheckoutStep::Summary => true,
            CheckoutStep::Address => !cart.is_empty(),
            CheckoutStep::Confirm => {
                !cart.is_empty()
                    && self
                        .shipping_address
                        .as_ref()
                        .map(|a| a.is_complete())
                        .unwrap_or(false)
            }
        }
    }

    /// Resolve a requested step to the earliest step whose preconditions
    /// are all met.
    pub fn entry_step(&self, requested: CheckoutStep, cart: &CartState) -> CheckoutStep {
        match requested {
            CheckoutStep::Summary => CheckoutStep::Summary,
            CheckoutStep::Address => {
                if cart.is_empty() {
                    CheckoutStep::Summary
                } else {
                    CheckoutStep::Address
                }
            }
            CheckoutStep::Confirm => {
                if cart.is_empty() {
                    CheckoutStep::Summary
                } else if !self.can_enter(CheckoutStep::Confirm, cart) {
                    CheckoutStep::Address
                } else {
                    CheckoutStep::Confirm
                }
            }
        }
    }

    /// Navigate to a step, redirecting to the earliest unmet step.
    /// Returns the step actually entered.
    pub fn go_to(&mut self, requested: CheckoutStep, cart: &CartState) -> CheckoutStep {
        self.step = self.entry_step(requested, cart);
        self.step
    }

    /// Capture the shipping address.
    pub fn set_address(&mut self, address: ShippingAddress) {
        self.shipping_address = Some(address);
    }

    /// Build the order for submission from the current cart snapshot.
    ///
    /// Pure with respect to the flow, so a failed submission can be
    /// retried without re-collecting input.
    pub fn build_order(&self, cart: &CartState) -> Result<Order, CommerceError> {
        let address = match &self.shipping_address {
            Some(a) if a.is_complete() => a.clone(),
            _ => return Err(CommerceError::IncompleteAddress),
        };
        Order::from_cart(cart, Some(address))
    }

    /// Discard the captured address and return to the summary step,
    /// called after a successful order placement.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};

    fn cart_with_item() -> CartState {
        let product = Product::new(1, "Mug", Money::new(900, Currency::USD)).with_stock(5);
        CartState::new().add_item(product, 1).unwrap()
    }

    fn complete_address() -> ShippingAddress {
        ShippingAddress::new("Ana", "12 Elm St", "Lisbon")
    }

    #[test]
    fn test_empty_cart_redirects_to_summary() {
        let flow = CheckoutFlow::new();
        let empty = CartState::new();

        assert_eq!(flow.entry_step(CheckoutStep::Address, &empty), CheckoutStep::Summary);
        assert_eq!(flow.entry_step(CheckoutStep::Confirm, &empty), CheckoutStep::Summary);
    }

    #[test]
    fn test_confirm_requires_address() {
        let mut flow = CheckoutFlow::new();
        let cart = cart_with_item();

        assert_eq!(flow.entry_step(CheckoutStep::Confirm, &cart), CheckoutStep::Address);

        flow.set_address(ShippingAddress::new("Ana", "", "Lisbon"));
        assert_eq!(flow.entry_step(CheckoutStep::Confirm, &cart), CheckoutStep::Address);

        flow.set_address(complete_address());
        assert_eq!(flow.entry_step(CheckoutStep::Confirm, &cart), CheckoutStep::Confirm);
    }

    #[test]
    fn test_go_to_tracks_entered_step() {
        let mut flow = CheckoutFlow::new();
        let cart = cart_with_item();

        assert_eq!(flow.go_to(CheckoutStep::Address, &cart), CheckoutStep::Address);
        assert_eq!(flow.step(), CheckoutStep::Address);
    }

    #[test]
    fn test_build_order_without_address_fails() {
        let flow = CheckoutFlow::new();
        let cart = cart_with_item();
        assert!(matches!(
            flow.build_order(&cart),
            Err(CommerceError::IncompleteAddress)
        ));
    }

    #[test]
    fn test_build_order_is_repeatable() {
        let mut flow = CheckoutFlow::new();
        let cart = cart_with_item();
        flow.set_address(complete_address());

        // A failed submission leaves the flow untouched, so the same
        // input produces another order on retry.
        let first = flow.build_order(&cart).unwrap();
        let second = flow.build_order(&cart).unwrap();
        assert_eq!(first.total, second.total);
        assert_eq!(flow.step(), CheckoutStep::Summary);
        assert!(flow.shipping_address().is_some());
    }

    #[test]
    fn test_reset_discards_address() {
        let mut flow = CheckoutFlow::new();
        flow.set_address(complete_address());
        flow.reset();
        assert!(flow.shipping_address().is_none());
        assert_eq!(flow.step(), CheckoutStep::Summary);
    }
}
