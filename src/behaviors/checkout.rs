//! Checkout Button

use log::{debug, info};
use storefront_core::checkout;

use crate::context::CartContext;
use crate::dom;

pub fn attach(cart: CartContext) {
    let Some(button) = dom::query(".checkout-btn") else {
        return;
    };
    dom::listen(&button, "click", move |_| {
        let outcome = cart.with_cart_untracked(checkout);
        if outcome.proceeded() {
            info!("checkout started");
        } else {
            debug!("checkout blocked: cart is empty");
        }
        dom::notify(outcome.notice());
    });
}
