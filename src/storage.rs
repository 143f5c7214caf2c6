//! Browser Storage
//!
//! localStorage-backed implementation of the core's key-value persistence
//! port. Storage access is best-effort: a missing window or a quota error
//! degrades to "nothing persisted", never to a crash.

use recipe_core::KeyValueStore;

/// `window.localStorage` behind the `KeyValueStore` port
#[derive(Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
