//! Repository Layer - Core Trait
//!
//! Defines the abstract interface for recipe storage. Implementations can
//! be in-memory (the mock backend), or a real service later.
//!
//! Timestamps are supplied by the caller: the core cannot read the browser
//! clock, and tests want deterministic values.

use crate::domain::{DomainResult, Recipe, RecipeDraft, RecipeUpdate};

/// Recipe store contract
pub trait RecipeRepository {
    /// Fetch one recipe by id
    fn get(&self, id: &str) -> Option<Recipe>;

    /// All recipes, in insertion order
    fn list(&self) -> Vec<Recipe>;

    /// Case-insensitive match against title, description and tags
    fn search(&self, query: &str) -> Vec<Recipe>;

    /// Store a new recipe; the repository assigns the id and timestamps it
    fn create(&self, draft: RecipeDraft, now: &str) -> Recipe;

    /// Patch an existing recipe
    fn update(&self, id: &str, update: RecipeUpdate, now: &str) -> DomainResult<Recipe>;

    /// Remove a recipe
    fn delete(&self, id: &str) -> DomainResult<()>;

    /// Grant a user edit access
    fn add_collaborator(&self, recipe_id: &str, user_id: &str, now: &str) -> DomainResult<Recipe>;

    /// Revoke a user's edit access
    fn remove_collaborator(
        &self,
        recipe_id: &str,
        user_id: &str,
        now: &str,
    ) -> DomainResult<Recipe>;
}
