//! `localStorage` preference store
//!
//! Storage can be missing entirely (sandboxed iframes) or throw on access
//! (privacy modes). Both surface as [`folio_core::Error::StorageUnavailable`]
//! so the controller falls back to its defaults.

use folio_core::store::PreferenceStore;
use folio_core::{Error, Result};
use web_sys::Storage;

/// Preference store over `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Resolve `localStorage` from the current window. Never fails; an
    /// unreachable store reports errors on use instead.
    #[must_use]
    pub fn from_window() -> Self {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten();
        Self { storage }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::storage_unavailable("localStorage is not accessible"))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::storage_unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage_write_failed(key, format!("{e:?}")))
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trips_value() {
        let mut store = LocalStore::from_window();
        assert!(store.is_available());

        store.set("folio.test-key", "42").unwrap();
        assert_eq!(store.get("folio.test-key").unwrap().as_deref(), Some("42"));
    }

    #[wasm_bindgen_test]
    fn test_missing_key_reads_none() {
        let store = LocalStore::from_window();
        assert_eq!(store.get("folio.never-written").unwrap(), None);
    }
}
