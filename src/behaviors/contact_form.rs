//! Contact Form Validation
//!
//! Validates `#contactForm` on submit. Nothing is sent anywhere; a valid
//! message only gets the thank-you notice and a form reset.

use log::{debug, info, warn};
use storefront_core::contact::SUCCESS_NOTICE;
use storefront_core::ContactSubmission;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;

/// Current value of an input or textarea by id; missing fields read as empty
fn field_value(id: &str) -> String {
    let Some(el) = dom::by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn attach() {
    let Some(el) = dom::by_id("contactForm") else {
        return;
    };
    let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
        warn!("#contactForm is not a form");
        return;
    };

    let target = form.clone();
    dom::listen(&target, "submit", move |ev| {
        ev.prevent_default();
        let submission = ContactSubmission::new(
            &field_value("name"),
            &field_value("email"),
            &field_value("phone"),
            &field_value("message"),
        );
        match submission.validate() {
            Ok(()) => {
                info!("contact message accepted");
                dom::notify(SUCCESS_NOTICE);
                form.reset();
            }
            Err(e) => {
                debug!("contact form rejected: {:?}", e);
                dom::notify(&e.to_string());
            }
        }
    });
}
