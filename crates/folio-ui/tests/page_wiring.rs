//! Browser tests for wiring the page controller to a live document
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-ui`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use folio_core::{BlockId, ControllerConfig, SectionId};
use folio_ui::browser::style::RootStyle;
use folio_ui::components::SiteHeader;
use folio_ui::error::UiError;
use folio_ui::page::PageContext;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::tick;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn attached_page_applies_accent_variables() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = PageContext::new(ControllerConfig::default());
        ctx.attach().unwrap();

        let style = RootStyle::from_document();
        assert!(style.get_var("--accent-h").is_some());
        assert!(style.get_var("--accent").is_some_and(|v| v.starts_with("hsl(")));

        ctx.teardown();
    });
}

#[wasm_bindgen_test]
fn hue_input_is_persisted_to_local_storage() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = PageContext::new(ControllerConfig::default());
        ctx.attach().unwrap();
        ctx.set_hue_input("15");
        assert_eq!(ctx.hue().degrees(), 15);

        let stored = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .get_item(&ControllerConfig::default().storage_key)
            .unwrap();
        assert_eq!(stored.as_deref(), Some("15"));

        ctx.teardown();
    });
}

#[wasm_bindgen_test]
fn events_after_teardown_are_ignored() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = PageContext::new(ControllerConfig::default());
        ctx.attach().unwrap();
        ctx.toggle_menu();
        assert!(ctx.menu_open());

        ctx.teardown();
        ctx.toggle_menu();
        assert!(ctx.menu_open());
        ctx.teardown();
    });
}

fn mount_host() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
async fn navigating_to_projects_marks_only_its_link_current() {
    let host = mount_host();
    let owner = Owner::new();
    let ctx = owner.with(|| PageContext::new(ControllerConfig::default()));
    let _mounted = owner.with(|| mount_to(host.clone(), move || view! { <SiteHeader ctx=ctx /> }));

    ctx.attach().unwrap();
    ctx.navigate(SectionId::Projects);
    tick().await;
    tick().await;

    let projects = host.query_selector("a[href=\"#projects\"]").unwrap().unwrap();
    assert_eq!(projects.get_attribute("aria-current").as_deref(), Some("page"));
    assert!(projects.class_list().contains("is-current"));

    let links = host.query_selector_all(".site-nav a").unwrap();
    assert_eq!(links.length(), 5);
    for index in 0..links.length() {
        let link = links.item(index).unwrap().dyn_into::<Element>().unwrap();
        if link.get_attribute("href").as_deref() != Some("#projects") {
            assert_eq!(link.get_attribute("aria-current"), None);
            assert!(!link.class_list().contains("is-current"));
        }
    }

    ctx.teardown();
    host.remove();
}

#[wasm_bindgen_test]
fn failed_reveal_observer_reveals_every_block() {
    let host = mount_host();
    host.set_inner_html(
        r#"<div class="reveal" data-reveal-id="fallback-a"></div>
           <div class="reveal" data-reveal-id="fallback-b"></div>"#,
    );

    let owner = Owner::new();
    owner.with(|| {
        let ctx = PageContext::new(ControllerConfig::default());
        ctx.attach().unwrap();

        let mut attached = Vec::new();
        ctx.keep_reveal_observer(&mut attached, Err(UiError::ObserverFailed("TypeError".to_string())));

        assert!(attached.is_empty());
        assert!(ctx.is_revealed(&BlockId::from("fallback-a")));
        assert!(ctx.is_revealed(&BlockId::from("fallback-b")));
        ctx.teardown();
    });
    host.remove();
}
