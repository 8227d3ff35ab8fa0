//! Site header: brand, primary navigation, menu toggle and hue picker
//!
//! On narrow viewports the navigation panel becomes an overlay opened by
//! the toggle. The panel id and toggle id are what outside-click detection
//! keys on, so they come from [`crate::page`].

use folio_core::SectionId;
use leptos::prelude::*;

use crate::components::HuePicker;
use crate::page::{MENU_TOGGLE_ID, NAV_PANEL_ID, PageContext};

#[component]
pub fn SiteHeader(ctx: PageContext) -> impl IntoView {
    view! {
        <header class="site-header" class=("is-elevated", move || ctx.header_elevated())>
            <a class="brand" href=SectionId::Home.fragment() on:click=move |_| ctx.navigate(SectionId::Home)>
                "folio"
            </a>
            <button
                id=MENU_TOGGLE_ID
                class="menu-toggle"
                type="button"
                aria-controls=NAV_PANEL_ID
                aria-label="Toggle navigation"
                aria-expanded=move || ctx.menu_open().to_string()
                on:click=move |_| ctx.toggle_menu()
            >
                <span class="menu-toggle-bar"></span>
                <span class="menu-toggle-bar"></span>
            </button>
            <nav id=NAV_PANEL_ID class="site-nav" aria-label="Primary">
                <ul>
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink ctx=ctx section=section /> })
                        .collect_view()}
                </ul>
            </nav>
            <HuePicker ctx=ctx />
        </header>
    }
}

/// One navigation entry. The active section's link is marked current.
#[component]
fn NavLink(ctx: PageContext, section: SectionId) -> impl IntoView {
    view! {
        <li>
            <a
                href=section.fragment()
                class=("is-current", move || ctx.is_current(section))
                aria-current=move || ctx.is_current(section).then_some("page")
                on:click=move |_| ctx.navigate(section)
            >
                {section.nav_label()}
            </a>
        </li>
    }
}
