//! Core error types for folio operations.
//!
//! Nothing in the page controller is fatal. These errors surface from
//! configuration loading, trace parsing and storage backends; the controller
//! itself recovers from every one of them.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("TOML parse error: {reason}")]
    ConfigParseFailed { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    // Domain errors
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("storage write failed for '{key}': {reason}")]
    StorageWriteFailed { key: String, reason: String },

    // Trace errors
    #[error("JSON parse error: {reason}")]
    TraceParseFailed { reason: String },
}

impl Error {
    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a storage unavailable error.
    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a storage write error.
    pub fn storage_write_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StorageWriteFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a trace parse error.
    pub fn trace_parse_failed(reason: impl Into<String>) -> Self {
        Self::TraceParseFailed {
            reason: reason.into(),
        }
    }
}
