//! Persistent credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate keeps exactly one opaque string under a fixed key.
//! `LocalStorageStore` wraps `localStorage` and reports `Unavailable` when
//! rendered on the server. `MemoryStore` is an in-process map for native use
//! and tests.
//!
//! TRADE-OFFS
//! ==========
//! `LocalStorageStore` looks the `Storage` handle up on every call instead of
//! caching it, so the type stays `Send + Sync` and can live in Leptos context.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure talking to the backing key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage {op} failed: {message}")]
    Operation { op: &'static str, message: String },
}

/// Single-key credential accessor.
pub trait CredentialStore: Send + Sync {
    /// Raw stored value, including empty strings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` when the value cannot be written (quota, private
    /// browsing, no window).
    fn save(&self, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` when the entry cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Read the credential, treating empty values and read failures as absent.
pub fn read_credential(store: &dyn CredentialStore) -> Option<String> {
    match store.load() {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("credential read failed: {e}");
            None
        }
    }
}

// =============================================================================
// LOCAL STORAGE
// =============================================================================

/// `window.localStorage` entry under `key`.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_error(op: &'static str, err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Operation { op, message: format!("{err:?}") }
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(&self.key)
                .map_err(|e| js_error("read", &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .set_item(&self.key, value)
                .map_err(|e| js_error("write", &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .remove_item(&self.key)
                .map_err(|e| js_error("remove", &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process map keyed like `localStorage`. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    key: String,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), entries: Arc::default() }
    }

    /// A second accessor over the same map under a different key.
    #[cfg(test)]
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Self { key: key.into(), entries: Arc::clone(&self.entries) }
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Operation { op: "lock", message: e.to_string() })
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(&self.key).cloned())
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        self.entries()?.insert(self.key.clone(), value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.entries()?.remove(&self.key);
        Ok(())
    }
}
