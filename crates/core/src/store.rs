//! Preference storage seam.
//!
//! The browser binding implements [`PreferenceStore`] over `localStorage`;
//! tests and the replay CLI use [`MemoryStore`] or [`UnavailableStore`].

use std::collections::HashMap;

use crate::error::Error;
use crate::hue::AccentHue;
use crate::result::{Result, ResultExt};

/// A string key/value store for per-browser preferences.
pub trait PreferenceStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read the stored hue, falling back to `default` on any failure.
pub fn restore_hue(store: &impl PreferenceStore, key: &str, default: AccentHue) -> AccentHue {
    let Some(raw) = store
        .get(key)
        .or_default_logged(None, "hue preference unreadable, using default")
    else {
        return default;
    };

    AccentHue::parse_stored(&raw).unwrap_or_else(|| {
        tracing::debug!(raw = %raw, "stored hue malformed, using default");
        default
    })
}

/// Persist the hue. Failures are logged and dropped.
pub fn persist_hue(store: &mut impl PreferenceStore, key: &str, hue: AccentHue) {
    store
        .set(key, &hue.to_storage_value())
        .ignore_logged("hue preference not persisted");
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Peek at a value without going through the trait.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that fails every access, as `localStorage` does in some private
/// browsing modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::storage_unavailable("storage disabled"))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(Error::storage_write_failed(key, "storage disabled"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "folio.accent-hue";

    #[test]
    fn given_empty_store_when_restored_then_default() {
        let store = MemoryStore::new();
        assert_eq!(restore_hue(&store, KEY, AccentHue::DEFAULT), AccentHue::DEFAULT);
    }

    #[test]
    fn given_valid_entry_when_restored_then_adopted() {
        let store = MemoryStore::with_entry(KEY, "42");
        assert_eq!(restore_hue(&store, KEY, AccentHue::DEFAULT).degrees(), 42);
    }

    #[test]
    fn given_malformed_entry_when_restored_then_default() {
        for raw in ["", "teal", "4.2", "720"] {
            let store = MemoryStore::with_entry(KEY, raw);
            assert_eq!(restore_hue(&store, KEY, AccentHue::DEFAULT), AccentHue::DEFAULT);
        }
    }

    #[test]
    fn given_unavailable_store_when_restored_and_persisted_then_no_panic() {
        let mut store = UnavailableStore;
        assert_eq!(restore_hue(&store, KEY, AccentHue::DEFAULT), AccentHue::DEFAULT);
        persist_hue(&mut store, KEY, AccentHue::DEFAULT);
    }

    #[test]
    fn given_hue_when_persisted_then_stored_as_decimal() {
        let mut store = MemoryStore::new();
        persist_hue(&mut store, KEY, AccentHue::clamped(7));
        assert_eq!(store.value(KEY), Some("7"));
    }
}
