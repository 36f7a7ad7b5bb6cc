//! Footer Year

use chrono::Datelike;

use crate::dom;

pub fn attach() {
    if let Some(el) = dom::by_id("year") {
        let year = chrono::Local::now().year();
        el.set_text_content(Some(&year.to_string()));
    }
}
