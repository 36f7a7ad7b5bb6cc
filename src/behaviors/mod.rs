//! Page Behaviors
//!
//! Each behavior looks for its own markup and stays inert when the page
//! does not have it.

mod add_to_cart;
pub mod cart_badge;
pub mod cart_page;
mod checkout;
mod contact_form;
mod footer_year;
mod nav_toggle;
mod slider;

use log::debug;
use storefront_core::StorefrontConfig;

use crate::context::use_cart;
use crate::dom;

/// Wire every behavior the current page has markup for
pub fn attach_all(config: &StorefrontConfig) {
    let cart = use_cart();

    footer_year::attach();
    nav_toggle::attach();
    slider::attach(config.slide_interval_ms);
    contact_form::attach();
    add_to_cart::attach(cart);
    cart_page::attach(cart);
    checkout::attach(cart);

    // Back/forward cache restores keep the old in-memory cart
    if let Some(win) = web_sys::window() {
        dom::listen(&win, "pageshow", move |_| cart.reload());
    }
    debug!("page behaviors attached");
}
