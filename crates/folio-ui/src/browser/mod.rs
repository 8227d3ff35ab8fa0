//! `web-sys` implementations of the controller's effect seams
//!
//! - `storage`: `localStorage`-backed preference store
//! - `style`: custom properties on the document element
//! - `raf`: `requestAnimationFrame` scheduler
//! - `listener`: event listeners as releasable subscriptions
//! - `observer`: `IntersectionObserver` wrappers
//! - `viewport`: scroll, size and media queries

pub mod listener;
pub mod observer;
pub mod raf;
pub mod storage;
pub mod style;
pub mod viewport;

use crate::error::{Result, UiError};
use web_sys::{Document, Window};

/// Get window object
pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Get document from window
pub fn get_document(window: &Window) -> Result<Document> {
    window.document().ok_or(UiError::DocumentNotAvailable)
}
