//! Configuration for the page interaction controller.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::hue::HUE_DEGREES;
use crate::result::Result;

/// Tunables for the page interaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Hue used when nothing valid is stored.
    #[serde(default = "default_hue")]
    pub default_hue: u16,

    /// Local-storage key holding the accent hue.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Scroll offset above which the header is elevated.
    #[serde(default = "default_elevation_threshold")]
    pub elevation_threshold: f64,

    /// Visible fraction of a block that reveals it.
    #[serde(default = "default_reveal_ratio")]
    pub reveal_ratio: f64,

    /// Visible fraction of a section that makes it active.
    #[serde(default = "default_active_ratio")]
    pub active_ratio: f64,

    /// Viewport width at or above which the mobile menu closes.
    #[serde(default = "default_desktop_breakpoint")]
    pub desktop_breakpoint: f64,

    /// Enables the parallax aura.
    #[serde(default = "default_aura_enabled")]
    pub aura_enabled: bool,

    /// Aura rotation rate in degrees per second.
    #[serde(default = "default_aura_rotation")]
    pub aura_rotation_deg_per_sec: f64,
}

const fn default_hue() -> u16 {
    220
}

fn default_storage_key() -> String {
    "folio.accent-hue".to_string()
}

const fn default_elevation_threshold() -> f64 {
    6.0
}

const fn default_reveal_ratio() -> f64 {
    0.14
}

const fn default_active_ratio() -> f64 {
    0.5
}

const fn default_desktop_breakpoint() -> f64 {
    1024.0
}

const fn default_aura_enabled() -> bool {
    true
}

const fn default_aura_rotation() -> f64 {
    4.0
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_hue: default_hue(),
            storage_key: default_storage_key(),
            elevation_threshold: default_elevation_threshold(),
            reveal_ratio: default_reveal_ratio(),
            active_ratio: default_active_ratio(),
            desktop_breakpoint: default_desktop_breakpoint(),
            aura_enabled: default_aura_enabled(),
            aura_rotation_deg_per_sec: default_aura_rotation(),
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] for malformed TOML and
    /// [`Error::InvalidConfig`] when a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigReadFailed`] if the file cannot be read, plus
    /// everything [`ControllerConfig::from_toml_str`] returns.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Apply `FOLIO_*` environment overrides. Unparseable values are ignored.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(hue) = lookup("FOLIO_DEFAULT_HUE").and_then(|v| v.trim().parse().ok()) {
            self.default_hue = hue;
        }

        if let Some(key) = lookup("FOLIO_STORAGE_KEY") {
            self.storage_key = key;
        }

        if let Some(enabled) = lookup("FOLIO_AURA_ENABLED") {
            match enabled.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.aura_enabled = true,
                "0" | "false" | "no" | "off" => self.aura_enabled = false,
                other => tracing::debug!(value = other, "ignoring FOLIO_AURA_ENABLED"),
            }
        }

        self
    }

    /// Check every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.default_hue >= HUE_DEGREES {
            return Err(Error::invalid_config(format!(
                "default_hue must be below {HUE_DEGREES}, got {}",
                self.default_hue
            )));
        }

        if self.storage_key.trim().is_empty() {
            return Err(Error::invalid_config("storage_key must not be empty"));
        }

        if !self.elevation_threshold.is_finite() || self.elevation_threshold < 0.0 {
            return Err(Error::invalid_config(format!(
                "elevation_threshold must be a non-negative number, got {}",
                self.elevation_threshold
            )));
        }

        validate_ratio("reveal_ratio", self.reveal_ratio)?;
        validate_ratio("active_ratio", self.active_ratio)?;

        if !self.desktop_breakpoint.is_finite() || self.desktop_breakpoint <= 0.0 {
            return Err(Error::invalid_config(format!(
                "desktop_breakpoint must be positive, got {}",
                self.desktop_breakpoint
            )));
        }

        if !self.aura_rotation_deg_per_sec.is_finite() || self.aura_rotation_deg_per_sec < 0.0 {
            return Err(Error::invalid_config(format!(
                "aura_rotation_deg_per_sec must be a non-negative number, got {}",
                self.aura_rotation_deg_per_sec
            )));
        }

        Ok(())
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config_parse_failed(e.to_string()))
    }
}

fn validate_ratio(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "{field} must be in (0, 1], got {value}"
        )))
    }
}
