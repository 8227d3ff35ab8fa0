//! Page interaction controller.
//!
//! Owns every piece of client-side page state and the three injected effects
//! (preference storage, style variables, frame scheduling). Each responsibility
//! lives in its own module; this type wires them to the page lifecycle:
//!
//! 1. [`PageController::new`] builds the controller around the effects.
//! 2. [`PageController::mount`] restores the hue, evaluates header elevation,
//!    registers reveal blocks and starts the aura clock.
//! 3. Event handlers mutate state while mounted.
//! 4. [`PageController::teardown`] releases every subscription and cancels
//!    pending frames. Events after teardown are ignored.

use serde::{Deserialize, Serialize};

use crate::active::ActiveSectionTracker;
use crate::aura::{self, Aura, AuraPoint};
use crate::config::ControllerConfig;
use crate::elevation::HeaderElevation;
use crate::event::{PageEvent, PointerSample, ScrollMetrics};
use crate::frame::{DebouncedEffect, FrameHandle, FrameScheduler, Request};
use crate::hue::{ACCENT_COLOR_VAR, ACCENT_HUE_VAR, AccentHue};
use crate::menu::{ClickTarget, CloseReason, MenuState};
use crate::reveal::{BlockId, RevealOutcome, RevealTracker};
use crate::section::SectionId;
use crate::store::{self, PreferenceStore};
use crate::style::StyleSink;
use crate::subscription::SubscriptionScope;

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Created,
    Mounted,
    Disposed,
}

/// What the runtime looks like at mount time.
#[derive(Debug, Clone, PartialEq)]
pub struct MountOptions {
    /// Scroll state when the page is first rendered.
    pub scroll: ScrollMetrics,
    /// Whether visibility observation is available.
    pub observation_supported: bool,
    /// Whether the visitor asked for reduced motion.
    pub reduced_motion: bool,
    /// Every block tagged for reveal.
    pub blocks: Vec<BlockId>,
    /// Wall-clock time in milliseconds.
    pub now_ms: f64,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            scroll: ScrollMetrics::default(),
            observation_supported: true,
            reduced_motion: false,
            blocks: Vec::new(),
            now_ms: 0.0,
        }
    }
}

/// Read-only view of controller state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub phase: Phase,
    pub hue: AccentHue,
    pub active_section: SectionId,
    pub menu_open: bool,
    pub header_elevated: bool,
    pub revealed: Vec<BlockId>,
    pub aura: AuraPoint,
    pub aura_rotation: f64,
}

/// The page interaction controller.
pub struct PageController<S, V, F> {
    config: ControllerConfig,
    store: S,
    style: V,
    scheduler: F,
    phase: Phase,
    hue: AccentHue,
    elevation: HeaderElevation,
    reveal: RevealTracker,
    active: ActiveSectionTracker,
    menu: MenuState,
    aura: Aura,
    aura_enabled: bool,
    aura_update: DebouncedEffect<AuraPoint>,
    rotation_frame: Option<FrameHandle>,
    subscriptions: SubscriptionScope,
}

impl<S, V, F> PageController<S, V, F>
where
    S: PreferenceStore,
    V: StyleSink,
    F: FrameScheduler,
{
    pub fn new(config: ControllerConfig, store: S, style: V, scheduler: F) -> Self {
        let hue = AccentHue::new(config.default_hue).unwrap_or_default();
        Self {
            elevation: HeaderElevation::new(config.elevation_threshold),
            reveal: RevealTracker::new(config.reveal_ratio),
            active: ActiveSectionTracker::new(config.active_ratio),
            aura: Aura::new(config.aura_rotation_deg_per_sec),
            aura_enabled: config.aura_enabled,
            config,
            store,
            style,
            scheduler,
            phase: Phase::Created,
            hue,
            menu: MenuState::new(),
            aura_update: DebouncedEffect::new(),
            rotation_frame: None,
            subscriptions: SubscriptionScope::new(),
        }
    }

    /// Bring the controller to its initial rendered state.
    pub fn mount(&mut self, options: MountOptions) {
        if self.phase != Phase::Created {
            tracing::debug!(phase = ?self.phase, "mount ignored");
            return;
        }
        self.phase = Phase::Mounted;

        let default = AccentHue::new(self.config.default_hue).unwrap_or_default();
        let restored = store::restore_hue(&self.store, &self.config.storage_key, default);
        self.apply_hue(restored);

        self.elevation.update(options.scroll.scroll_y);

        let block_count = options.blocks.len();
        for block in options.blocks {
            self.reveal.observe(block);
        }
        if !options.observation_supported {
            self.reveal_all();
        }

        self.aura_enabled = self.config.aura_enabled && !options.reduced_motion;
        if self.aura_enabled {
            self.aura.start_clock(options.now_ms);
            self.write_aura_point(AuraPoint::CENTER);
            self.write_rotation(0.0);
            self.rotation_frame = self.scheduler.schedule();
        }

        tracing::info!(
            hue = %self.hue,
            blocks = block_count,
            elevated = self.elevation.is_elevated(),
            aura = self.aura_enabled,
            "page controller mounted"
        );
    }

    /// Release every subscription and pending frame.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        self.phase = Phase::Disposed;

        let released = self.subscriptions.dispose();
        self.aura_update.cancel(&mut self.scheduler);
        if let Some(handle) = self.rotation_frame.take() {
            self.scheduler.cancel(handle);
        }

        tracing::info!(subscriptions = released, "page controller torn down");
    }

    // ------------------------------------------------------------------
    // Accent hue
    // ------------------------------------------------------------------

    /// Apply raw slider input. Returns the applied hue, or `None` if the
    /// input was not numeric and the current hue was kept.
    pub fn set_hue_input(&mut self, raw: &str) -> Option<AccentHue> {
        if !self.is_mounted() {
            return None;
        }
        let Some(hue) = AccentHue::parse_input(raw) else {
            tracing::debug!(raw, "ignoring non-numeric hue input");
            return None;
        };
        self.set_hue(hue);
        Some(hue)
    }

    pub fn set_hue(&mut self, hue: AccentHue) {
        if self.is_mounted() && hue != self.hue {
            self.apply_hue(hue);
        }
    }

    fn apply_hue(&mut self, hue: AccentHue) {
        self.hue = hue;
        self.style.set_var(ACCENT_HUE_VAR, &hue.to_string());
        self.style.set_var(ACCENT_COLOR_VAR, &hue.css_color());
        store::persist_hue(&mut self.store, &self.config.storage_key, hue);
    }

    // ------------------------------------------------------------------
    // Scroll, visibility
    // ------------------------------------------------------------------

    /// Scroll tick: header elevation is recomputed now, the aura is
    /// coalesced to the next frame.
    pub fn on_scroll(&mut self, scroll: ScrollMetrics) {
        if !self.is_mounted() {
            return;
        }

        if self.elevation.update(scroll.scroll_y) {
            tracing::trace!(elevated = self.elevation.is_elevated(), "header elevation changed");
        }

        if self.aura_enabled {
            if let Some(target) =
                self.aura
                    .scroll_target(scroll.scroll_y, scroll.scroll_height, scroll.viewport_height)
            {
                self.request_aura(target);
            }
        }
    }

    pub fn on_block_visibility(&mut self, block: &BlockId, ratio: f64) -> RevealOutcome {
        if !self.is_mounted() {
            return RevealOutcome::Ignored;
        }
        let outcome = self.reveal.on_visibility(block, ratio);
        if outcome == RevealOutcome::Revealed {
            tracing::trace!(block = %block, "block revealed");
        }
        outcome
    }

    /// Reveal every registered block at once. The fallback when visibility
    /// cannot be observed. Returns the blocks newly revealed.
    pub fn reveal_all(&mut self) -> Vec<BlockId> {
        if !self.is_mounted() {
            return Vec::new();
        }
        let revealed = self.reveal.reveal_all();
        tracing::info!(
            blocks = revealed.len(),
            "visibility observation unavailable, revealing all blocks"
        );
        revealed
    }

    pub fn on_section_visibility(&mut self, section: SectionId, ratio: f64) -> Option<SectionId> {
        if !self.is_mounted() {
            return None;
        }
        self.active.on_visibility(section, ratio)
    }

    // ------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------

    /// Menu toggle button. Returns whether the menu is now open.
    pub fn toggle_menu(&mut self) -> bool {
        if self.is_mounted() {
            let open = self.menu.toggle();
            if !open {
                self.log_close(CloseReason::Toggle);
            }
        }
        self.menu.is_open()
    }

    pub fn on_key(&mut self, key: &str) -> Option<CloseReason> {
        self.mounted_then(|c| c.menu.on_key(key))
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Option<CloseReason> {
        self.mounted_then(|c| c.menu.on_click(target))
    }

    pub fn on_resize(&mut self, width: f64) -> Option<CloseReason> {
        let breakpoint = self.config.desktop_breakpoint;
        self.mounted_then(|c| c.menu.on_resize(width, breakpoint))
    }

    /// In-page anchor navigation: activates the section and closes the menu.
    pub fn on_navigate(&mut self, section: SectionId) -> Option<CloseReason> {
        if !self.is_mounted() {
            return None;
        }
        self.active.activate(section);
        let reason = self.menu.on_navigate();
        if let Some(reason) = reason {
            self.log_close(reason);
        }
        reason
    }

    fn mounted_then(
        &mut self,
        close: impl FnOnce(&mut Self) -> Option<CloseReason>,
    ) -> Option<CloseReason> {
        if !self.is_mounted() {
            return None;
        }
        let reason = close(self);
        if let Some(reason) = reason {
            self.log_close(reason);
        }
        reason
    }

    fn log_close(&self, reason: CloseReason) {
        tracing::debug!(%reason, "mobile menu closed");
    }

    // ------------------------------------------------------------------
    // Aura
    // ------------------------------------------------------------------

    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        if !self.is_mounted() || !self.aura_enabled {
            return;
        }
        if let Some(target) = self.aura.pointer_target(
            sample.x,
            sample.y,
            sample.viewport_width,
            sample.viewport_height,
        ) {
            self.request_aura(target);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.is_mounted() {
            self.aura.release_pointer();
        }
    }

    fn request_aura(&mut self, target: AuraPoint) {
        if let Request::Immediate(point) = self.aura_update.request(&mut self.scheduler, target) {
            self.write_aura_point(point);
        }
    }

    /// Animation-frame callback. Flushes the coalesced aura position and
    /// advances the rotation, rescheduling the rotation loop.
    pub fn on_frame(&mut self, now_ms: f64) {
        if !self.is_mounted() || !self.aura_enabled {
            return;
        }

        if let Some(point) = self.aura_update.take() {
            tracing::trace!(x = point.x, y = point.y, "aura flushed");
            self.write_aura_point(point);
        }

        if let Some(degrees) = self.aura.tick(now_ms) {
            self.write_rotation(degrees);
            if let Some(previous) = self.rotation_frame.take() {
                self.scheduler.cancel(previous);
            }
            self.rotation_frame = self.scheduler.schedule();
        }
    }

    fn write_aura_point(&mut self, point: AuraPoint) {
        self.aura.apply(point);
        let (x, y) = point.css_values();
        self.style.set_var(aura::AURA_X_VAR, &x);
        self.style.set_var(aura::AURA_Y_VAR, &y);
    }

    fn write_rotation(&mut self, degrees: f64) {
        self.style
            .set_var(aura::AURA_ROTATION_VAR, &aura::rotation_css(degrees));
    }

    // ------------------------------------------------------------------
    // Dispatch, accessors
    // ------------------------------------------------------------------

    /// Route a serialized event to its handler.
    pub fn dispatch(&mut self, event: &PageEvent) {
        match event {
            PageEvent::Scroll(scroll) => self.on_scroll(*scroll),
            PageEvent::Resize { width } => {
                self.on_resize(*width);
            }
            PageEvent::PointerMove(sample) => self.on_pointer_move(*sample),
            PageEvent::PointerLeave => self.on_pointer_leave(),
            PageEvent::Key { key } => {
                self.on_key(key);
            }
            PageEvent::Click { target } => {
                self.on_click(*target);
            }
            PageEvent::ToggleMenu => {
                self.toggle_menu();
            }
            PageEvent::Navigate { section } => {
                self.on_navigate(*section);
            }
            PageEvent::HueInput { value } => {
                self.set_hue_input(value);
            }
            PageEvent::BlockVisibility { block, ratio } => {
                self.on_block_visibility(block, *ratio);
            }
            PageEvent::SectionVisibility { section, ratio } => {
                self.on_section_visibility(*section, *ratio);
            }
            PageEvent::Frame { now_ms } => self.on_frame(*now_ms),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            phase: self.phase,
            hue: self.hue,
            active_section: self.active.active(),
            menu_open: self.menu.is_open(),
            header_elevated: self.elevation.is_elevated(),
            revealed: self.reveal.revealed().iter().cloned().collect(),
            aura: self.aura.point(),
            aura_rotation: self.aura.rotation(),
        }
    }

    fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn hue(&self) -> AccentHue {
        self.hue
    }

    #[must_use]
    pub const fn active_section(&self) -> SectionId {
        self.active.active()
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub const fn header_elevated(&self) -> bool {
        self.elevation.is_elevated()
    }

    #[must_use]
    pub fn is_revealed(&self, block: &BlockId) -> bool {
        self.reveal.is_revealed(block)
    }

    #[must_use]
    pub const fn aura_enabled(&self) -> bool {
        self.aura_enabled
    }

    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn style(&self) -> &V {
        &self.style
    }

    #[must_use]
    pub const fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Listener and observer guards owned by this page.
    pub fn subscriptions_mut(&mut self) -> &mut SubscriptionScope {
        &mut self.subscriptions
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::frame::ManualScheduler;
    use crate::store::MemoryStore;
    use crate::style::RecordingStyle;

    type TestController = PageController<MemoryStore, RecordingStyle, ManualScheduler>;

    fn mounted(options: MountOptions) -> TestController {
        let mut controller = PageController::new(
            ControllerConfig::default(),
            MemoryStore::new(),
            RecordingStyle::new(),
            ManualScheduler::new(),
        );
        controller.mount(options);
        controller
    }

    #[test]
    fn given_created_controller_when_events_arrive_then_ignored() {
        let mut controller = PageController::new(
            ControllerConfig::default(),
            MemoryStore::new(),
            RecordingStyle::new(),
            ManualScheduler::new(),
        );
        controller.on_scroll(ScrollMetrics::at(100.0));
        controller.toggle_menu();
        assert!(!controller.header_elevated());
        assert!(!controller.menu_open());
        assert_eq!(controller.phase(), Phase::Created);
    }

    #[test]
    fn given_mounted_twice_then_second_mount_ignored() {
        let mut controller = mounted(MountOptions::default());
        controller.set_hue_input("10");
        controller.mount(MountOptions::default());
        assert_eq!(controller.hue().degrees(), 10);
    }

    #[test]
    fn given_reduced_motion_when_mounted_then_aura_disabled() {
        let mut controller = mounted(MountOptions {
            reduced_motion: true,
            ..MountOptions::default()
        });
        assert!(!controller.aura_enabled());
        assert_eq!(controller.scheduler().scheduled_count(), 0);

        controller.on_pointer_move(PointerSample {
            x: 10.0,
            y: 10.0,
            viewport_width: 100.0,
            viewport_height: 100.0,
        });
        assert_eq!(controller.style().var(aura::AURA_X_VAR), None);
    }

    #[test]
    fn given_menu_closed_by_toggle_then_reports_closed() {
        let mut controller = mounted(MountOptions::default());
        assert!(controller.toggle_menu());
        assert!(!controller.toggle_menu());
    }

    #[test]
    fn given_navigation_when_menu_closed_then_section_still_activated() {
        let mut controller = mounted(MountOptions::default());
        assert_eq!(controller.on_navigate(SectionId::Contact), None);
        assert_eq!(controller.active_section(), SectionId::Contact);
    }

    #[test]
    fn given_refusing_scheduler_when_pointer_moves_then_applied_immediately() {
        let mut controller = PageController::new(
            ControllerConfig::default(),
            MemoryStore::new(),
            RecordingStyle::new(),
            ManualScheduler::refusing(),
        );
        controller.mount(MountOptions::default());
        controller.on_pointer_move(PointerSample {
            x: 100.0,
            y: 0.0,
            viewport_width: 100.0,
            viewport_height: 100.0,
        });
        assert_eq!(controller.style().var(aura::AURA_X_VAR), Some("1.000"));
        assert_eq!(controller.style().var(aura::AURA_Y_VAR), Some("-1.000"));
    }
}
