//! Add To Cart
//!
//! One delegated click listener on `.product-list`; any button inside a
//! `.product-item` that reads "add to cart" (or carries `add-to-cart`) adds
//! that product.

use log::info;
use storefront_core::catalog::{added_notice, is_add_to_cart_trigger, ADD_TO_CART_CLASS};
use storefront_core::scan_entry;

use crate::context::CartContext;
use crate::dom::{self, DomEntry};

pub fn attach(cart: CartContext) {
    let Some(list) = dom::query(".product-list") else {
        return;
    };
    dom::listen(&list, "click", move |ev| {
        let Some(button) = dom::event_element(&ev).and_then(|el| dom::closest(&el, "button")) else {
            return;
        };
        let label = button.text_content().unwrap_or_default();
        if !is_add_to_cart_trigger(&label, button.class_list().contains(ADD_TO_CART_CLASS)) {
            return;
        }
        let Some(entry) = dom::closest(&button, ".product-item") else {
            return;
        };

        let product = scan_entry(&DomEntry(entry));
        let notice = added_notice(&product.title);
        info!("adding {:?} at {} to cart", product.title, product.price);
        cart.add_item(product);
        dom::notify(&notice);
    });
}
