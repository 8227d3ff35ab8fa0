//! WASM entry point for the folio page
//!
//! Trunk compiles this to WASM and mounts [`App`] to the document body.

use folio_ui::App;
use leptos::prelude::*;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
