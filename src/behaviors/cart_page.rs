//! Cart Page
//!
//! Fills `.cart-table` and `.cart-summary` from the cart, and turns clicks
//! on `.remove-item` and edits to `.cart-qty` into cart operations. Rows are
//! addressed by their `data-index`.

use log::{debug, warn};
use storefront_core::domain::parse_quantity;
use storefront_core::render::{replace_summary_lines, SummaryContainer};
use storefront_core::{Cart, CartView};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::context::CartContext;
use crate::dom;

/// The table's body, created if the page left it out
fn table_body(table: &Element) -> Option<Element> {
    if let Some(body) = table.query_selector("tbody").ok().flatten() {
        return Some(body);
    }
    let body = dom::document()?.create_element("tbody").ok()?;
    table.append_child(&body).ok()?;
    Some(body)
}

pub fn attach(cart: CartContext) {
    let Some(body) = dom::query(".cart-table").and_then(|table| table_body(&table)) else {
        return;
    };

    dom::listen(&body, "click", move |ev| {
        let Some(button) = dom::event_element(&ev).and_then(|el| dom::closest(&el, ".remove-item")) else {
            return;
        };
        if let Some(index) = dom::data_index(&button) {
            cart.remove_item(index);
        }
    });

    dom::listen(&body, "change", move |ev| {
        let Some(input) = dom::event_element(&ev).and_then(|el| dom::closest(&el, ".cart-qty")) else {
            return;
        };
        let Some(index) = dom::data_index(&input) else {
            return;
        };
        let value = input
            .dyn_ref::<HtmlInputElement>()
            .map(|i| i.value())
            .unwrap_or_default();
        cart.update_quantity(index, parse_quantity(&value));
    });
}

/// Replace the table rows and summary lines with the cart's current state
pub fn render(cart: &Cart) {
    let Some(table) = dom::query(".cart-table") else {
        return;
    };
    let view = CartView::from_cart(cart);
    if let Some(body) = table_body(&table) {
        body.set_inner_html(&view.rows_html());
    }
    if let Some(summary) = dom::query(".cart-summary") {
        replace_summary_lines(&mut DomSummary(summary), &view.summary);
    }
    debug!("cart table rendered with {} rows", view.rows.len());
}

/// The `.cart-summary` element as seen by the summary renderer
struct DomSummary(Element);

impl SummaryContainer for DomSummary {
    fn remove_lines(&mut self, class: &str) {
        for stale in dom::query_all_in(&self.0, &format!(".{}", class)) {
            stale.remove();
        }
    }

    fn prepend_line(&mut self, class_name: &str, inner_html: &str) {
        let Some(p) = dom::document().and_then(|doc| doc.create_element("p").ok()) else {
            return;
        };
        p.set_class_name(class_name);
        p.set_inner_html(inner_html);
        let first = self.0.first_child();
        if let Err(e) = self.0.insert_before(&p, first.as_ref()) {
            warn!("could not insert summary line: {:?}", e);
        }
    }
}
