//! Custom properties on `<html>`

use folio_core::style::StyleSink;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement};

/// Writes controller variables to `document.documentElement.style`.
#[derive(Debug, Clone)]
pub struct RootStyle {
    style: Option<CssStyleDeclaration>,
}

impl RootStyle {
    #[must_use]
    pub fn from_document() -> Self {
        let style = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .map(|root| root.style());
        Self { style }
    }

    /// Current value of a custom property, empty if unset.
    #[must_use]
    pub fn get_var(&self, name: &str) -> Option<String> {
        self.style
            .as_ref()
            .and_then(|style| style.get_property_value(name).ok())
            .filter(|value| !value.is_empty())
    }
}

impl StyleSink for RootStyle {
    fn set_var(&mut self, name: &str, value: &str) {
        let Some(style) = &self.style else {
            return;
        };
        if let Err(e) = style.set_property(name, value) {
            web_sys::console::error_1(&format!("folio: failed to set {name}: {e:?}").into());
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_var_lands_on_document_element() {
        let mut style = RootStyle::from_document();
        style.set_var("--accent-h", "15");
        assert_eq!(style.get_var("--accent-h").as_deref(), Some("15"));
    }
}
