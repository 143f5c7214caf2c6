//! Session Persistence
//!
//! Stores the logged-in user in the injected key-value store so a reload
//! keeps the session alive. A corrupt entry is dropped rather than
//! surfaced: the user simply lands logged out.

use crate::domain::User;
use crate::storage::KeyValueStore;

pub const SESSION_KEY: &str = "recipehub_user";

/// Load the persisted session user, if any. Removes the entry when it
/// fails to parse.
pub fn load(store: &dyn KeyValueStore) -> Option<User> {
    let raw = store.get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(_) => {
            store.remove(SESSION_KEY);
            None
        }
    }
}

/// Persist the session user.
pub fn save(store: &dyn KeyValueStore, user: &User) {
    if let Ok(json) = serde_json::to_string(user) {
        store.set(SESSION_KEY, &json);
    }
}

/// Clear the session (logout, account deletion).
pub fn clear(store: &dyn KeyValueStore) {
    store.remove(SESSION_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_session_roundtrip() {
        let store = MemoryStore::new();
        assert!(load(&store).is_none());

        let user = User::new("1", "john_doe", "john@example.com");
        save(&store, &user);
        assert_eq!(load(&store), Some(user));

        clear(&store);
        assert!(load(&store).is_none());
    }

    #[test]
    fn test_corrupt_session_is_removed() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json");

        assert!(load(&store).is_none());
        assert_eq!(store.get(SESSION_KEY), None);
    }
}
