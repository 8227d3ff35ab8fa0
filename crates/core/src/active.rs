//! Active-section tracking.
//!
//! Each section reports its own visible fraction. Any report at or above the
//! threshold makes that section active; when neighbours both qualify the last
//! report wins.

use crate::section::SectionId;

/// Tracks the section currently considered in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionTracker {
    ratio: f64,
    active: SectionId,
}

impl ActiveSectionTracker {
    #[must_use]
    pub const fn new(ratio: f64) -> Self {
        Self {
            ratio,
            active: SectionId::Home,
        }
    }

    /// Apply a visibility report. Returns the new active section if it changed.
    pub fn on_visibility(&mut self, section: SectionId, visible_ratio: f64) -> Option<SectionId> {
        if visible_ratio >= self.ratio {
            self.activate(section)
        } else {
            None
        }
    }

    /// Make `section` active directly, as anchor navigation does.
    pub fn activate(&mut self, section: SectionId) -> Option<SectionId> {
        if self.active == section {
            None
        } else {
            self.active = section;
            Some(section)
        }
    }

    #[must_use]
    pub const fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }
}
