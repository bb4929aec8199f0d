//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades to
//! `None` (or a no-op) when the API is missing instead of panicking.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Viewport size in CSS pixels, `(0, 0)` when unavailable.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    (width.unwrap_or(0.0), height.unwrap_or(0.0))
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
