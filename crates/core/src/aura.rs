//! Parallax aura.
//!
//! The aura follows the pointer, or scroll progress when no pointer is
//! driving it, through a pair of coordinates normalized to `[-1, 1]`. A slow
//! rotation advances with wall-clock time.

use serde::{Deserialize, Serialize};

pub const AURA_X_VAR: &str = "--aura-x";
pub const AURA_Y_VAR: &str = "--aura-y";
pub const AURA_ROTATION_VAR: &str = "--aura-rot";

/// Normalized aura position. Both axes lie in `[-1, 1]`; `0` is the centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AuraPoint {
    pub x: f64,
    pub y: f64,
}

impl AuraPoint {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Pointer position within a viewport. `None` for a degenerate viewport.
    #[must_use]
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Option<Self> {
        Some(Self {
            x: normalize_percent(percent_of(client_x, width)?),
            y: normalize_percent(percent_of(client_y, height)?),
        })
    }

    /// Vertical influence from scroll progress, keeping `x`.
    #[must_use]
    pub fn from_scroll(x: f64, scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let range = scroll_height - viewport_height;
        let progress = if range.is_finite() && range > 0.0 && scroll_y.is_finite() {
            (scroll_y / range).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            x,
            y: progress.mul_add(2.0, -1.0),
        }
    }

    /// Style variable values for `--aura-x` and `--aura-y`.
    #[must_use]
    pub fn css_values(self) -> (String, String) {
        (format!("{:.3}", self.x), format!("{:.3}", self.y))
    }
}

fn percent_of(position: f64, extent: f64) -> Option<f64> {
    (extent.is_finite() && extent > 0.0 && position.is_finite())
        .then(|| (position / extent * 100.0).clamp(0.0, 100.0))
}

fn normalize_percent(percent: f64) -> f64 {
    (percent / 50.0 - 1.0).clamp(-1.0, 1.0)
}

/// Rotation in degrees after `elapsed_ms` at `deg_per_sec`, wrapped to `[0, 360)`.
#[must_use]
pub fn rotation_at(elapsed_ms: f64, deg_per_sec: f64) -> f64 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / 1000.0 * deg_per_sec).rem_euclid(360.0)
}

/// Style variable value for `--aura-rot`.
#[must_use]
pub fn rotation_css(degrees: f64) -> String {
    format!("{degrees:.2}deg")
}

/// What currently moves the aura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuraDriver {
    #[default]
    Scroll,
    Pointer,
}

/// Aura position, driver and rotation clock.
#[derive(Debug, Clone)]
pub struct Aura {
    deg_per_sec: f64,
    point: AuraPoint,
    driver: AuraDriver,
    origin_ms: Option<f64>,
    last_frame_ms: Option<f64>,
    rotation: f64,
}

impl Aura {
    #[must_use]
    pub const fn new(deg_per_sec: f64) -> Self {
        Self {
            deg_per_sec,
            point: AuraPoint::CENTER,
            driver: AuraDriver::Scroll,
            origin_ms: None,
            last_frame_ms: None,
            rotation: 0.0,
        }
    }

    /// Target for a pointer move. The pointer becomes the driver.
    pub fn pointer_target(
        &mut self,
        client_x: f64,
        client_y: f64,
        width: f64,
        height: f64,
    ) -> Option<AuraPoint> {
        let target = AuraPoint::from_pointer(client_x, client_y, width, height)?;
        self.driver = AuraDriver::Pointer;
        Some(target)
    }

    /// Target for a scroll tick, or `None` while the pointer drives.
    #[must_use]
    pub fn scroll_target(
        &self,
        scroll_y: f64,
        scroll_height: f64,
        viewport_height: f64,
    ) -> Option<AuraPoint> {
        (self.driver == AuraDriver::Scroll).then(|| {
            AuraPoint::from_scroll(self.point.x, scroll_y, scroll_height, viewport_height)
        })
    }

    /// Hand control back to scroll, e.g. when the pointer leaves the window.
    pub fn release_pointer(&mut self) {
        self.driver = AuraDriver::Scroll;
    }

    /// Record the applied point.
    pub fn apply(&mut self, point: AuraPoint) {
        self.point = point;
    }

    /// Start the rotation clock.
    pub fn start_clock(&mut self, now_ms: f64) {
        self.origin_ms = Some(now_ms);
    }

    /// Advance the rotation for a frame at `now_ms`.
    ///
    /// Returns `None` when the frame was already handled; several callbacks
    /// may fire within one frame and share its timestamp.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        if self.last_frame_ms == Some(now_ms) {
            return None;
        }
        self.last_frame_ms = Some(now_ms);

        let origin = *self.origin_ms.get_or_insert(now_ms);
        self.rotation = rotation_at(now_ms - origin, self.deg_per_sec);
        Some(self.rotation)
    }

    #[must_use]
    pub const fn point(&self) -> AuraPoint {
        self.point
    }

    #[must_use]
    pub const fn driver(&self) -> AuraDriver {
        self.driver
    }

    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }
}
