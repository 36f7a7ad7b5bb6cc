//! DOM Helpers
//!
//! Lookups, delegated listeners and notices over web-sys.

use storefront_core::CatalogEntry;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// First element in the document matching `selector`
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements in the document matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    match document().map(|d| d.query_selector_all(selector)) {
        Some(Ok(list)) => collect_elements(&list),
        _ => Vec::new(),
    }
}

/// All descendants of `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Nearest ancestor-or-self matching `selector`
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// The element an event was dispatched on
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Row position carried by cart controls
pub fn data_index(el: &Element) -> Option<usize> {
    el.get_attribute("data-index")?.trim().parse().ok()
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("could not listen for `{}`: {:?}", event, e);
    }
    callback.forget();
}

/// Blocking, dismiss-to-continue notice
pub fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// A `.product-item` element read through the catalog scanner
pub struct DomEntry(pub Element);

impl CatalogEntry for DomEntry {
    fn text_of(&self, selector: &str) -> Option<String> {
        let found = self.0.query_selector(selector).ok().flatten()?;
        found.text_content().map(|t| t.trim().to_string())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn attr_of(&self, selector: &str, name: &str) -> Option<String> {
        self.0.query_selector(selector).ok().flatten()?.get_attribute(name)
    }
}
