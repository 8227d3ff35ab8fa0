//! Decorative aura behind the page
//!
//! Position and rotation come entirely from the `--aura-*` custom properties
//! the controller writes on the root element.

use leptos::prelude::*;

#[component]
pub fn AuraBackdrop() -> impl IntoView {
    view! { <div class="aura" aria-hidden="true"></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aura_component_exists() {
        let _component = AuraBackdrop;
    }
}
