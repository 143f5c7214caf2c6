//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the recipe
//! catalog and the saved-recipe id list.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::Recipe;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recipe catalog mirrored from the mock backend
    pub recipes: Vec<Recipe>,
    /// Ids of recipes the user has saved (persisted to browser storage)
    pub saved_ids: Vec<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the recipe catalog
pub fn store_set_recipes(store: &AppStore, recipes: Vec<Recipe>) {
    store.recipes().set(recipes);
}

/// Add a recipe to the store
pub fn store_add_recipe(store: &AppStore, recipe: Recipe) {
    store.recipes().write().push(recipe);
}

/// Update a recipe in the store by id
pub fn store_update_recipe(store: &AppStore, updated: Recipe) {
    if let Some(recipe) = store
        .recipes()
        .write()
        .iter_mut()
        .find(|recipe| recipe.id == updated.id)
    {
        *recipe = updated;
    }
}

/// Remove a recipe from the store by id
pub fn store_remove_recipe(store: &AppStore, recipe_id: &str) {
    store.recipes().write().retain(|recipe| recipe.id != recipe_id);
}
