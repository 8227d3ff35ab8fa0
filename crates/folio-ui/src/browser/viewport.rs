//! Scroll position, viewport size and media queries

use folio_core::{PointerSample, ScrollMetrics};
use web_sys::{Document, MouseEvent, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

#[must_use]
pub fn viewport_width(window: &Window) -> f64 {
    dimension(window.inner_width())
}

#[must_use]
pub fn viewport_height(window: &Window) -> f64 {
    dimension(window.inner_height())
}

/// Current scroll offset and page geometry.
#[must_use]
pub fn scroll_metrics(window: &Window, document: &Document) -> ScrollMetrics {
    let scroll_height = document
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        scroll_height,
        viewport_height: viewport_height(window),
    }
}

#[must_use]
pub fn pointer_sample(window: &Window, event: &MouseEvent) -> PointerSample {
    PointerSample {
        x: f64::from(event.client_x()),
        y: f64::from(event.client_y()),
        viewport_width: viewport_width(window),
        viewport_height: viewport_height(window),
    }
}

#[must_use]
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Milliseconds on the same clock as animation-frame timestamps.
#[must_use]
pub fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |performance| performance.now())
}

/// Location hash, including the leading `#`.
#[must_use]
pub fn location_hash(window: &Window) -> Option<String> {
    window.location().hash().ok().filter(|hash| !hash.is_empty())
}
