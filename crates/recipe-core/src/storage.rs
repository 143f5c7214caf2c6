//! Key-Value Persistence Port
//!
//! Abstract interface for the browser-local persistence the host injects
//! (session user, saved-recipe ids). The frontend backs this with
//! localStorage; tests use the in-memory implementation.
//!
//! Browser storage is best-effort: implementations swallow their own
//! failures, so the port has no error channel.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key-value store contract
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory implementation for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("key", "value");
        assert_eq!(store.get("key"), Some("value".to_string()));

        store.set("key", "other");
        assert_eq!(store.get("key"), Some("other".to_string()));

        store.remove("key");
        assert_eq!(store.get("key"), None);
    }
}
