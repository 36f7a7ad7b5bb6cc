//! UI Components
//!
//! Leptos components mounted alongside the page's own markup.

mod scroll_top_button;

pub use scroll_top_button::ScrollTopButton;
