//! Storefront App
//!
//! Root component: owns the cart signal, attaches the page behaviors and
//! re-renders cart markup whenever the cart changes.

use leptos::prelude::*;
use log::debug;
use storefront_core::StorefrontConfig;

use crate::behaviors::{self, cart_badge, cart_page};
use crate::components::ScrollTopButton;
use crate::context::CartContext;

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    let cart = CartContext::open(&config.storage_key);
    provide_context(cart);

    behaviors::attach_all(&config);

    // Every cart mutation lands here; this replaces reloading the page
    Effect::new(move |_| {
        cart.with_cart(|current| {
            debug!("rendering cart: {} lines, {} units", current.len(), current.item_count());
            cart_page::render(current);
            cart_badge::render(current);
        });
    });

    view! {
        <ScrollTopButton threshold=config.scroll_threshold_px />
    }
}
