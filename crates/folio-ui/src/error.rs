//! Error types for the browser binding
//!
//! Every DOM call that can fail maps into [`UiError`]; callers log and carry
//! on with the page in its last good state.

/// Errors raised while wiring the page to the browser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No global `window` (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// No `document` on the window
    #[error("document is not available")]
    DocumentNotAvailable,

    /// `addEventListener` threw
    #[error("failed to attach {event} listener: {reason}")]
    ListenerAttachFailed { event: &'static str, reason: String },

    /// `IntersectionObserver` construction threw
    #[error("failed to create visibility observer: {0}")]
    ObserverFailed(String),

    /// `requestAnimationFrame` or `cancelAnimationFrame` threw
    #[error("animation frame request failed: {0}")]
    FrameRequestFailed(String),

    /// A DOM query threw (bad selector, detached node)
    #[error("DOM query failed: {0}")]
    QueryFailed(String),
}

impl UiError {
    pub(crate) fn listener(event: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::ListenerAttachFailed {
            event,
            reason: format!("{err:?}"),
        }
    }
}

/// Result type alias for browser binding operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Report a non-fatal failure on the browser console.
pub fn report(context: &str, err: &UiError) {
    web_sys::console::error_1(&format!("folio: {context}: {err}").into());
}
