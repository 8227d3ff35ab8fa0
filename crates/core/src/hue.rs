//! Accent hue preference.
//!
//! The hue is a degree on the color wheel that drives the site's highlight
//! color. Stored values that fail to parse or fall off the wheel are treated
//! as absent; slider input is clamped onto the wheel instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of degrees on the hue circle. Valid hues are `0..HUE_DEGREES`.
pub const HUE_DEGREES: u16 = 360;

/// Highest valid hue.
pub const MAX_HUE: u16 = HUE_DEGREES - 1;

/// Style variable holding the raw hue.
pub const ACCENT_HUE_VAR: &str = "--accent-h";

/// Style variable holding the derived accent color.
pub const ACCENT_COLOR_VAR: &str = "--accent";

/// An integer hue in `[0, 359]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct AccentHue(u16);

impl AccentHue {
    /// Hue used when no preference is stored.
    pub const DEFAULT: Self = Self(220);

    /// Create a hue, rejecting values off the wheel.
    #[must_use]
    pub const fn new(degrees: u16) -> Option<Self> {
        if degrees < HUE_DEGREES {
            Some(Self(degrees))
        } else {
            None
        }
    }

    /// Create a hue, clamping into `[0, 359]`.
    #[must_use]
    pub fn clamped(degrees: i64) -> Self {
        Self(degrees.clamp(0, i64::from(MAX_HUE)) as u16)
    }

    /// Parse a persisted value: a base-10 integer on the wheel.
    ///
    /// Anything else (empty, non-numeric, fractional, out of range) yields
    /// `None` so the caller falls back to its default.
    #[must_use]
    pub fn parse_stored(raw: &str) -> Option<Self> {
        raw.trim().parse::<u16>().ok().and_then(Self::new)
    }

    /// Parse slider or text input.
    ///
    /// Numeric input is rounded and clamped onto the wheel. Non-numeric or
    /// non-finite input yields `None` and the current hue should be kept.
    #[must_use]
    pub fn parse_input(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| {
                let bounded = value.round().clamp(0.0, f64::from(MAX_HUE));
                Self(bounded as u16)
            })
    }

    /// The hue in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    /// Value written to storage.
    #[must_use]
    pub fn to_storage_value(self) -> String {
        self.0.to_string()
    }

    /// Derived CSS color consumed by the stylesheet.
    #[must_use]
    pub fn css_color(self) -> String {
        format!("hsl({} 85% 60%)", self.0)
    }
}

impl Default for AccentHue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AccentHue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for AccentHue {
    type Error = Error;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::new(degrees).ok_or_else(|| {
            Error::invalid_config(format!("hue must be below {HUE_DEGREES}, got {degrees}"))
        })
    }
}

impl From<AccentHue> for u16 {
    fn from(hue: AccentHue) -> Self {
        hue.0
    }
}
