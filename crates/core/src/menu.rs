//! Mobile navigation overlay.
//!
//! One open/closed flag with four independent close triggers. Each handler
//! reports why it closed the menu so the caller can log or test each path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Class applied to the body while the overlay is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Where a pointer press landed relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// Inside the navigation panel.
    Panel,
    /// On the menu toggle button.
    Toggle,
    /// Anywhere else in the document.
    Outside,
}

/// Why the menu closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    Toggle,
    Escape,
    OutsideClick,
    Navigation,
    Resize,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Toggle => "toggle",
            Self::Escape => "escape",
            Self::OutsideClick => "outside click",
            Self::Navigation => "navigation",
            Self::Resize => "resize",
        };
        f.write_str(reason)
    }
}

/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the flag. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Keyboard handler. Only `Escape` closes.
    pub fn on_key(&mut self, key: &str) -> Option<CloseReason> {
        (key == "Escape").then_some(CloseReason::Escape).and_then(|r| self.close(r))
    }

    /// Document pointer-press handler. Presses on the panel or the toggle are
    /// left alone; the toggle's own click handler flips the flag.
    pub fn on_click(&mut self, target: ClickTarget) -> Option<CloseReason> {
        match target {
            ClickTarget::Outside => self.close(CloseReason::OutsideClick),
            ClickTarget::Panel | ClickTarget::Toggle => None,
        }
    }

    /// In-page anchor navigation handler.
    pub fn on_navigate(&mut self) -> Option<CloseReason> {
        self.close(CloseReason::Navigation)
    }

    /// Viewport resize handler.
    pub fn on_resize(&mut self, width: f64, desktop_breakpoint: f64) -> Option<CloseReason> {
        if width >= desktop_breakpoint {
            self.close(CloseReason::Resize)
        } else {
            None
        }
    }

    fn close(&mut self, reason: CloseReason) -> Option<CloseReason> {
        if self.open {
            self.open = false;
            Some(reason)
        } else {
            None
        }
    }
}
