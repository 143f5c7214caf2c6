//! Saved-Recipe List
//!
//! The user's saved-recipe ids, persisted through the key-value port as a
//! JSON array. Mutations persist immediately; both are no-ops when the id
//! is already in the requested state.

use crate::storage::KeyValueStore;

pub const SAVED_RECIPES_KEY: &str = "recipehub_saved_recipes";

/// Load the saved-recipe id list. A corrupt entry is removed and treated
/// as empty.
pub fn load(store: &dyn KeyValueStore) -> Vec<String> {
    let Some(raw) = store.get(SAVED_RECIPES_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(ids) => ids,
        Err(_) => {
            store.remove(SAVED_RECIPES_KEY);
            Vec::new()
        }
    }
}

/// Add a recipe id to the saved list. Returns `false` when it was already
/// saved (no state change, nothing persisted).
pub fn save(store: &dyn KeyValueStore, ids: &mut Vec<String>, recipe_id: &str) -> bool {
    if ids.iter().any(|id| id == recipe_id) {
        return false;
    }
    ids.push(recipe_id.to_string());
    persist(store, ids);
    true
}

/// Remove a recipe id from the saved list. Returns `false` when it was not
/// saved.
pub fn unsave(store: &dyn KeyValueStore, ids: &mut Vec<String>, recipe_id: &str) -> bool {
    let before = ids.len();
    ids.retain(|id| id != recipe_id);
    if ids.len() == before {
        return false;
    }
    persist(store, ids);
    true
}

fn persist(store: &dyn KeyValueStore, ids: &[String]) {
    if let Ok(json) = serde_json::to_string(ids) {
        store.set(SAVED_RECIPES_KEY, &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_save_and_unsave_persist() {
        let store = MemoryStore::new();
        let mut ids = load(&store);
        assert!(ids.is_empty());

        assert!(save(&store, &mut ids, "1"));
        assert!(save(&store, &mut ids, "2"));
        assert_eq!(load(&store), vec!["1".to_string(), "2".to_string()]);

        assert!(unsave(&store, &mut ids, "1"));
        assert_eq!(load(&store), vec!["2".to_string()]);
    }

    #[test]
    fn test_save_twice_is_noop() {
        let store = MemoryStore::new();
        let mut ids = Vec::new();

        assert!(save(&store, &mut ids, "1"));
        assert!(!save(&store, &mut ids, "1"));
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_unsave_missing_is_noop() {
        let store = MemoryStore::new();
        let mut ids = vec!["1".to_string()];
        assert!(!unsave(&store, &mut ids, "2"));
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_corrupt_list_is_removed() {
        let store = MemoryStore::new();
        store.set(SAVED_RECIPES_KEY, "not json");

        assert!(load(&store).is_empty());
        assert_eq!(store.get(SAVED_RECIPES_KEY), None);
    }
}
