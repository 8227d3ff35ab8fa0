//! Binding between the page controller and Leptos
//!
//! [`PageContext`] owns the controller (browser-backed effects) and mirrors
//! the parts of its state the markup renders into a signal. Components read
//! that signal; browser events and components both write through
//! [`PageContext::update`].
//!
//! Wiring happens once after the first render ([`PageContext::attach`]) and is
//! undone by [`PageContext::teardown`] when the app unmounts.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::str::FromStr;

use folio_core::menu::{ClickTarget, MENU_OPEN_CLASS};
use folio_core::reveal::{REVEAL_CLASS, RevealOutcome};
use folio_core::subscription::Subscription;
use folio_core::{
    AccentHue, BlockId, ControllerConfig, MountOptions, PageController, PageSnapshot, SectionId,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, MouseEvent, Node, Window};

use crate::browser::listener::{Passive, listen};
use crate::browser::observer::{self, Visibility};
use crate::browser::raf::RafScheduler;
use crate::browser::storage::LocalStore;
use crate::browser::style::RootStyle;
use crate::browser::{get_document, get_window, viewport};
use crate::error::{Result, UiError, report};

/// Id of the navigation panel that the mobile overlay shows.
pub const NAV_PANEL_ID: &str = "site-nav";
/// Id of the button that opens and closes the overlay.
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
/// Attribute naming a reveal block.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

pub type BrowserController = PageController<LocalStore, RootStyle, RafScheduler>;

/// Controller state the markup depends on. Aura values are excluded; they
/// only reach the page through style variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub hue: AccentHue,
    pub active_section: SectionId,
    pub menu_open: bool,
    pub header_elevated: bool,
    pub revealed: BTreeSet<BlockId>,
}

impl From<PageSnapshot> for ViewState {
    fn from(snapshot: PageSnapshot) -> Self {
        Self {
            hue: snapshot.hue,
            active_section: snapshot.active_section,
            menu_open: snapshot.menu_open,
            header_elevated: snapshot.header_elevated,
            revealed: snapshot.revealed.into_iter().collect(),
        }
    }
}

/// Copyable handle to the page controller, passed to every component.
#[derive(Clone, Copy)]
pub struct PageContext {
    controller: StoredValue<RefCell<BrowserController>, LocalStorage>,
    view: RwSignal<ViewState>,
}

impl PageContext {
    pub fn new(config: ControllerConfig) -> Self {
        let controller = PageController::new(
            config,
            LocalStore::from_window(),
            RootStyle::from_document(),
            RafScheduler::from_window(),
        );
        let view = RwSignal::new(ViewState::from(controller.snapshot()));
        Self {
            controller: StoredValue::new_local(RefCell::new(controller)),
            view,
        }
    }

    /// Run `f` against the controller, then publish any view change.
    ///
    /// `None` if the context was disposed or the controller is already
    /// borrowed further up the stack.
    pub fn update<R>(&self, f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
        let (result, next) = self
            .controller
            .try_with_value(|cell| {
                let Ok(mut controller) = cell.try_borrow_mut() else {
                    web_sys::console::warn_1(&"folio: nested controller access ignored".into());
                    return None;
                };
                let result = f(&mut controller);
                Some((result, ViewState::from(controller.snapshot())))
            })
            .flatten()?;

        if self.view.with_untracked(|current| current != &next) {
            self.view.set(next);
        }
        Some(result)
    }

    fn read<R>(&self, f: impl FnOnce(&BrowserController) -> R) -> Option<R> {
        self.controller
            .try_with_value(|cell| cell.try_borrow().ok().map(|controller| f(&controller)))
            .flatten()
    }

    // ------------------------------------------------------------------
    // Reactive reads
    // ------------------------------------------------------------------

    pub fn hue(&self) -> AccentHue {
        self.view.with(|view| view.hue)
    }

    pub fn active_section(&self) -> SectionId {
        self.view.with(|view| view.active_section)
    }

    pub fn is_current(&self, section: SectionId) -> bool {
        self.active_section() == section
    }

    pub fn menu_open(&self) -> bool {
        self.view.with(|view| view.menu_open)
    }

    pub fn header_elevated(&self) -> bool {
        self.view.with(|view| view.header_elevated)
    }

    pub fn is_revealed(&self, block: &BlockId) -> bool {
        self.view.with(|view| view.revealed.contains(block))
    }

    // ------------------------------------------------------------------
    // Component actions
    // ------------------------------------------------------------------

    pub fn toggle_menu(&self) {
        self.update(BrowserController::toggle_menu);
    }

    pub fn navigate(&self, section: SectionId) {
        self.update(|controller| controller.on_navigate(section));
    }

    pub fn set_hue_input(&self, raw: &str) {
        self.update(|controller| controller.set_hue_input(raw));
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Mount the controller and subscribe it to the browser.
    ///
    /// Individual listeners or observers that fail to attach are reported
    /// and skipped; the page keeps working without them.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or document, or the reveal
    /// blocks cannot be queried.
    pub fn attach(self) -> Result<()> {
        let window = get_window()?;
        let document = get_document(&window)?;
        let blocks = reveal_blocks(&document)?;
        let supported = observer::observation_supported(&window);

        let options = MountOptions {
            scroll: viewport::scroll_metrics(&window, &document),
            observation_supported: supported,
            reduced_motion: viewport::prefers_reduced_motion(&window),
            blocks: blocks.iter().map(|(id, _)| id.clone()).collect(),
            now_ms: viewport::now_ms(&window),
        };

        self.update(move |controller| {
            controller.scheduler().set_callback(move |now_ms| {
                self.update(|controller| controller.on_frame(now_ms));
            });
            let guard = controller.scheduler().callback_guard();
            controller.subscriptions_mut().add(guard);
            controller.mount(options);
        });

        let mut subscriptions = self.listeners(&window, &document);
        if supported {
            subscriptions.extend(self.observers(&document, blocks));
        }
        let attached = subscriptions.len();
        self.update(move |controller| {
            for subscription in subscriptions {
                controller.subscriptions_mut().add(subscription);
            }
        });

        if let Some(section) =
            viewport::location_hash(&window).and_then(|hash| SectionId::from_fragment(&hash))
        {
            self.navigate(section);
        }

        web_sys::console::debug_1(&format!("folio: page attached ({attached} subscriptions)").into());
        Ok(())
    }

    /// Release everything [`attach`](Self::attach) set up. Safe to call twice.
    pub fn teardown(self) {
        self.update(BrowserController::teardown);
        set_body_menu_class(false);
    }

    fn listeners(self, window: &Window, document: &Document) -> Vec<Subscription> {
        let mut attached = Vec::new();

        let (w, d) = (window.clone(), document.clone());
        keep(
            &mut attached,
            listen(window, "scroll", Passive::Yes, move |_| {
                self.update(|c| c.on_scroll(viewport::scroll_metrics(&w, &d)));
            }),
        );

        let w = window.clone();
        keep(
            &mut attached,
            listen(window, "resize", Passive::Yes, move |_| {
                self.update(|c| c.on_resize(viewport::viewport_width(&w)));
            }),
        );

        keep(
            &mut attached,
            listen(document, "keydown", Passive::No, move |event: Event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                    self.update(|c| c.on_key(&key));
                }
            }),
        );

        let d = document.clone();
        keep(
            &mut attached,
            listen(document, "click", Passive::No, move |event: Event| {
                let target = classify_click(&d, &event);
                self.update(|c| c.on_click(target));
            }),
        );

        let w = window.clone();
        keep(
            &mut attached,
            listen(window, "hashchange", Passive::No, move |_| {
                if let Some(section) =
                    viewport::location_hash(&w).and_then(|hash| SectionId::from_fragment(&hash))
                {
                    self.navigate(section);
                }
            }),
        );

        let w = window.clone();
        keep(
            &mut attached,
            listen(window, "pointermove", Passive::Yes, move |event: Event| {
                if let Some(pointer) = event.dyn_ref::<MouseEvent>() {
                    let sample = viewport::pointer_sample(&w, pointer);
                    self.update(|c| c.on_pointer_move(sample));
                }
            }),
        );

        if let Some(root) = document.document_element() {
            keep(
                &mut attached,
                listen(&root, "pointerleave", Passive::Yes, move |_| {
                    self.update(BrowserController::on_pointer_leave);
                }),
            );
        }

        attached
    }

    fn observers(self, document: &Document, blocks: Vec<(BlockId, Element)>) -> Vec<Subscription> {
        let (reveal_ratio, active_ratio) = self
            .read(|c| (c.config().reveal_ratio, c.config().active_ratio))
            .unwrap_or_default();
        let mut attached = Vec::new();

        let elements: Vec<Element> = blocks.into_iter().map(|(_, element)| element).collect();
        let reveal = observer::observe("reveal-observer", &elements, reveal_ratio, move |seen: Visibility<'_>| {
            let Some(id) = seen.target.get_attribute(REVEAL_ID_ATTR) else {
                return;
            };
            let block = BlockId::new(id);
            let outcome = self.update(|c| c.on_block_visibility(&block, seen.ratio));
            if outcome == Some(RevealOutcome::Revealed) {
                seen.observer.unobserve(seen.target);
            }
        });
        self.keep_reveal_observer(&mut attached, reveal);

        let sections: Vec<Element> = SectionId::ALL
            .iter()
            .filter_map(|section| document.get_element_by_id(section.as_str()))
            .collect();
        keep(
            &mut attached,
            observer::observe("section-observer", &sections, active_ratio, move |seen: Visibility<'_>| {
                if let Ok(section) = SectionId::from_str(&seen.target.id()) {
                    self.update(|c| c.on_section_visibility(section, seen.ratio));
                }
            }),
        );

        attached
    }

    /// Keep the reveal observer, or reveal every block when it could not be
    /// built.
    pub fn keep_reveal_observer(self, attached: &mut Vec<Subscription>, built: Result<Subscription>) {
        if built.is_err() {
            self.update(BrowserController::reveal_all);
        }
        keep(attached, built);
    }
}

fn keep(attached: &mut Vec<Subscription>, result: Result<Subscription>) {
    match result {
        Ok(subscription) => attached.push(subscription),
        Err(e) => report("attach", &e),
    }
}

/// Every element carrying the reveal class and a block id.
///
/// # Errors
///
/// Returns an error if the selector query throws.
pub fn reveal_blocks(document: &Document) -> Result<Vec<(BlockId, Element)>> {
    let nodes = document
        .query_selector_all(&format!(".{REVEAL_CLASS}"))
        .map_err(|e| UiError::QueryFailed(format!("{e:?}")))?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| {
            element
                .get_attribute(REVEAL_ID_ATTR)
                .map(|id| (BlockId::new(id), element))
        })
        .collect())
}

/// Where a click landed relative to the overlay.
#[must_use]
pub fn classify_click(document: &Document, event: &Event) -> ClickTarget {
    let Some(node) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
        return ClickTarget::Outside;
    };
    let within = |id: &str| {
        document
            .get_element_by_id(id)
            .is_some_and(|element| element.contains(Some(&node)))
    };

    if within(MENU_TOGGLE_ID) {
        ClickTarget::Toggle
    } else if within(NAV_PANEL_ID) {
        ClickTarget::Panel
    } else {
        ClickTarget::Outside
    }
}

/// Mirror the overlay state onto `<body>`.
pub fn set_body_menu_class(open: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(MENU_OPEN_CLASS, open) {
        web_sys::console::error_1(&format!("folio: failed to toggle {MENU_OPEN_CLASS}: {e:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Phase;
    use folio_core::aura::AuraPoint;

    fn snapshot(revealed: Vec<BlockId>, aura: AuraPoint) -> PageSnapshot {
        PageSnapshot {
            phase: Phase::Mounted,
            hue: AccentHue::DEFAULT,
            active_section: SectionId::Home,
            menu_open: false,
            header_elevated: true,
            revealed,
            aura,
            aura_rotation: 12.0,
        }
    }

    #[test]
    fn test_view_state_ignores_aura_motion() {
        let still = ViewState::from(snapshot(Vec::new(), AuraPoint::CENTER));
        let moved = ViewState::from(snapshot(Vec::new(), AuraPoint { x: 0.5, y: -0.5 }));
        assert_eq!(still, moved);
    }

    #[test]
    fn test_view_state_collects_revealed_blocks() {
        let view = ViewState::from(snapshot(
            vec![BlockId::from("about-copy"), BlockId::from("hero")],
            AuraPoint::CENTER,
        ));
        assert!(view.revealed.contains(&BlockId::from("hero")));
        assert_eq!(view.revealed.len(), 2);
        assert!(view.header_elevated);
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod browser_tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_click_on_unrelated_node_is_outside() {
        let document = web_sys::window().unwrap().document().unwrap();
        let stray = document.create_element("p").unwrap();
        document.body().unwrap().append_child(&stray).unwrap();

        let event = web_sys::MouseEvent::new("click").unwrap();
        stray.dispatch_event(&event).unwrap();
        assert_eq!(classify_click(&document, &event), ClickTarget::Outside);
    }

    #[wasm_bindgen_test]
    fn test_click_inside_panel_is_panel() {
        let document = web_sys::window().unwrap().document().unwrap();
        let panel = document.create_element("nav").unwrap();
        panel.set_id(NAV_PANEL_ID);
        let link = document.create_element("a").unwrap();
        panel.append_child(&link).unwrap();
        document.body().unwrap().append_child(&panel).unwrap();

        let event = web_sys::MouseEvent::new("click").unwrap();
        link.dispatch_event(&event).unwrap();
        assert_eq!(classify_click(&document, &event), ClickTarget::Panel);
        panel.remove();
    }

    #[wasm_bindgen_test]
    fn test_reveal_blocks_reads_ids() {
        let document = web_sys::window().unwrap().document().unwrap();
        let block = document.create_element("div").unwrap();
        block.set_class_name(REVEAL_CLASS);
        block.set_attribute(REVEAL_ID_ATTR, "probe-block").unwrap();
        document.body().unwrap().append_child(&block).unwrap();

        let blocks = reveal_blocks(&document).unwrap();
        assert!(blocks.iter().any(|(id, _)| id.as_str() == "probe-block"));
        block.remove();
    }
}
