//! Root application component
//!
//! Owns the page controller for the lifetime of the app: wires it to the
//! browser after the first render and tears it down on unmount.

use folio_core::ControllerConfig;
use leptos::prelude::*;

use crate::components::{AuraBackdrop, SiteFooter, SiteHeader};
use crate::error::report;
use crate::page::{PageContext, set_body_menu_class};
use crate::pages::Home;

#[component]
pub fn App() -> impl IntoView {
    let ctx = PageContext::new(ControllerConfig::default());

    // Runs once, after the markup exists.
    Effect::new(move |_| {
        if let Err(e) = untrack(move || ctx.attach()) {
            report("page wiring failed", &e);
        }
    });

    Effect::new(move |_| set_body_menu_class(ctx.menu_open()));

    on_cleanup(move || ctx.teardown());

    view! {
        <AuraBackdrop />
        <SiteHeader ctx=ctx />
        <main id="main">
            <Home ctx=ctx />
        </main>
        <SiteFooter />
    }
}
