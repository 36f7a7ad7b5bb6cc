//! Mobile Navigation Toggle
//!
//! `#menuToggle` shows and hides the header menu by toggling `show`.

use log::debug;

use crate::dom;

pub fn attach() {
    let (Some(toggle), Some(menu)) = (dom::by_id("menuToggle"), dom::query("header nav ul")) else {
        debug!("no menu toggle on this page");
        return;
    };
    dom::listen(&toggle, "click", move |_| {
        let _ = menu.class_list().toggle("show");
    });
}
