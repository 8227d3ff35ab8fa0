//! Scroll-driven header elevation.

/// Whether the header should render elevated at `scroll_y`.
#[must_use]
pub fn is_elevated(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Header elevation flag, recomputed on every scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderElevation {
    threshold: f64,
    elevated: bool,
}

impl HeaderElevation {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elevated: false,
        }
    }

    /// Recompute from the current offset. Returns `true` if the flag changed.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let next = is_elevated(scroll_y, self.threshold);
        let changed = next != self.elevated;
        self.elevated = next;
        changed
    }

    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        self.elevated
    }
}
