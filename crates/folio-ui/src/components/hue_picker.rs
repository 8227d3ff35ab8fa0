//! Accent hue slider

use folio_core::hue::MAX_HUE;
use leptos::prelude::*;

use crate::page::PageContext;

/// Range input bound to the accent hue. Every input event is applied and
/// persisted immediately.
#[component]
pub fn HuePicker(ctx: PageContext) -> impl IntoView {
    view! {
        <label class="hue-picker">
            <span class="visually-hidden">"Accent hue"</span>
            <input
                type="range"
                min="0"
                max=MAX_HUE.to_string()
                step="1"
                prop:value=move || ctx.hue().degrees().to_string()
                on:input=move |ev| ctx.set_hue_input(&event_target_value(&ev))
            />
            <span class="hue-swatch" aria-hidden="true"></span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_picker_component_exists() {
        let _component = HuePicker;
    }
}
