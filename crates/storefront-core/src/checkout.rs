//! Checkout Gate
//!
//! Checkout is a placeholder: an empty cart is blocked, anything else gets
//! the demo confirmation. No order is created and nothing is sent.

use crate::domain::Cart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out; stop at the notice
    EmptyCart,
    /// Placeholder confirmation for a non-empty cart
    Started,
}

impl CheckoutOutcome {
    /// Notice shown to the user
    pub fn notice(&self) -> &'static str {
        match self {
            CheckoutOutcome::EmptyCart => "Your cart is empty.",
            CheckoutOutcome::Started => {
                "Checkout started (demo). In production this will POST to your server."
            }
        }
    }

    pub fn proceeded(&self) -> bool {
        matches!(self, CheckoutOutcome::Started)
    }
}

pub fn checkout(cart: &Cart) -> CheckoutOutcome {
    if cart.is_empty() {
        CheckoutOutcome::EmptyCart
    } else {
        CheckoutOutcome::Started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, ProductDetails};

    #[test]
    fn test_empty_cart_is_blocked() {
        let outcome = checkout(&Cart::new());
        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
        assert!(!outcome.proceeded());
        assert_eq!(outcome.notice(), "Your cart is empty.");
    }

    #[test]
    fn test_non_empty_cart_starts_demo_checkout() {
        let cart = Cart::from_items(vec![CartItem::new(1, ProductDetails::new("Mug", 6.0, ""))]);
        let outcome = checkout(&cart);
        assert!(outcome.proceeded());
        assert!(outcome.notice().starts_with("Checkout started (demo)"));
    }
}
