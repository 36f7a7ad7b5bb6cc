//! Cart Badge

use storefront_core::Cart;

use crate::dom;

/// Show the total unit count in `#cart-count`
pub fn render(cart: &Cart) {
    if let Some(badge) = dom::by_id("cart-count") {
        badge.set_text_content(Some(&cart.item_count().to_string()));
    }
}
