//! Scroll-To-Top Button
//!
//! Fixed bottom-right button, shown once the page is scrolled past a
//! threshold; smooth-scrolls back to the top.

use leptos::prelude::*;

const BASE_STYLE: &str = "position: fixed; right: 18px; bottom: 18px; padding: 10px 12px; \
    background: #111; color: #fff; border: none; border-radius: 6px; cursor: pointer; z-index: 1000;";

fn button_style(visible: bool) -> String {
    format!("{} display: {};", BASE_STYLE, if visible { "block" } else { "none" })
}

fn scroll_to_top() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn ScrollTopButton(
    /// Vertical scroll offset (px) past which the button appears
    threshold: f64,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let _scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        set_visible.set(offset > threshold);
    });

    view! {
        <button
            id="scrollTopBtn"
            title="Back to top"
            style=move || button_style(visible.get())
            on:click=move |_| scroll_to_top()
        >
            "⇧"
        </button>
    }
}
