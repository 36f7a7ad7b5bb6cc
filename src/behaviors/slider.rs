//! Image Slider
//!
//! Shows one slide at a time, with optional `.prev`/`.next` buttons, an
//! autoplay interval, and `window.nextSlide()`/`window.prevSlide()` for
//! pages that use inline handlers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use storefront_core::SlideCursor;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::dom;

/// Markup shapes a slide set may come in, most specific first
const SLIDE_SELECTORS: [&str; 3] = [".slider .slides img", ".slider img", ".slide"];

struct Slider {
    slides: Vec<HtmlElement>,
    cursor: RefCell<SlideCursor>,
}

impl Slider {
    fn new(slides: Vec<HtmlElement>) -> Self {
        let cursor = RefCell::new(SlideCursor::new(slides.len()));
        Self { slides, cursor }
    }

    fn show(&self) {
        let cursor = self.cursor.borrow();
        for (i, slide) in self.slides.iter().enumerate() {
            let display = if cursor.is_visible(i) { "block" } else { "none" };
            if let Err(e) = slide.style().set_property("display", display) {
                warn!("could not style slide {}: {:?}", i, e);
            }
        }
    }

    fn next(&self) {
        self.cursor.borrow_mut().next();
        self.show();
    }

    fn prev(&self) {
        self.cursor.borrow_mut().prev();
        self.show();
    }
}

fn find_slides() -> Vec<HtmlElement> {
    SLIDE_SELECTORS
        .iter()
        .map(|selector| dom::query_all(selector))
        .find(|found| !found.is_empty())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Publish a slider step as a global function
fn expose(name: &str, slider: Rc<Slider>, step: fn(&Slider)) {
    let callback = Closure::<dyn FnMut()>::new(move || step(&slider));
    if let Some(win) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(&win, &JsValue::from_str(name), callback.as_ref()) {
            warn!("could not expose {}: {:?}", name, e);
        }
    }
    callback.forget();
}

pub fn attach(interval_ms: u32) {
    let slider = Rc::new(Slider::new(find_slides()));
    expose("nextSlide", Rc::clone(&slider), Slider::next);
    expose("prevSlide", Rc::clone(&slider), Slider::prev);

    if slider.slides.is_empty() {
        debug!("no slides on this page");
        return;
    }
    debug!("slider with {} slides", slider.slides.len());
    slider.show();

    if let Some(prev) = dom::query(".prev") {
        let slider = Rc::clone(&slider);
        dom::listen(&prev, "click", move |_| slider.prev());
    }
    if let Some(next) = dom::query(".next") {
        let slider = Rc::clone(&slider);
        dom::listen(&next, "click", move |_| slider.next());
    }

    Interval::new(interval_ms, move || slider.next()).forget();
}
