//! Recipe API
//!
//! Simulated recipe-service calls against the injected repository, plus
//! the synchronous saved-list operations (browser storage, no latency to
//! simulate).

use recipe_core::{saved, DomainError, DomainResult, Recipe, RecipeDraft, RecipeUpdate};

use super::Api;

/// How many recipes the featured shelf shows
const FEATURED_COUNT: usize = 20;

impl Api {
    pub async fn list_recipes(&self) -> Vec<Recipe> {
        self.delay().await;
        self.repo.list()
    }

    pub async fn featured_recipes(&self) -> Vec<Recipe> {
        self.delay().await;
        self.repo.list().into_iter().take(FEATURED_COUNT).collect()
    }

    pub async fn search_recipes(&self, query: &str) -> Vec<Recipe> {
        self.delay().await;
        self.repo.search(query)
    }

    /// Synchronous lookup against the already-loaded catalog mirror
    pub fn get_recipe(&self, id: &str) -> Option<Recipe> {
        self.repo.get(id)
    }

    /// Chef display name for a user id, from that user's recipes
    pub fn chef_name_by_id(&self, user_id: &str) -> String {
        self.repo
            .list()
            .into_iter()
            .find(|recipe| recipe.created_by == user_id)
            .map(|recipe| recipe.chef_name)
            .unwrap_or_else(|| "Unknown Chef".to_string())
    }

    pub async fn create_recipe(&self, draft: RecipeDraft) -> Recipe {
        self.delay().await;
        self.repo.create(draft, &self.now())
    }

    pub async fn update_recipe(&self, id: &str, update: RecipeUpdate) -> DomainResult<Recipe> {
        self.delay().await;
        self.repo.update(id, update, &self.now())
    }

    pub async fn delete_recipe(&self, id: &str) -> DomainResult<()> {
        self.delay().await;
        self.repo.delete(id)
    }

    /// Grant edit access by email, via mock user lookup
    pub async fn add_collaborator(&self, recipe_id: &str, email: &str) -> DomainResult<Recipe> {
        self.delay().await;
        let user = self
            .users
            .find_by_email(email)
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        self.repo.add_collaborator(recipe_id, &user.id, &self.now())
    }

    pub async fn remove_collaborator(
        &self,
        recipe_id: &str,
        user_id: &str,
    ) -> DomainResult<Recipe> {
        self.delay().await;
        self.repo
            .remove_collaborator(recipe_id, user_id, &self.now())
    }

    // ========================
    // Saved recipes (synchronous, browser storage)
    // ========================

    pub fn load_saved(&self) -> Vec<String> {
        saved::load(self.storage())
    }

    pub fn save_recipe(&self, ids: &mut Vec<String>, recipe_id: &str) -> bool {
        saved::save(self.storage(), ids, recipe_id)
    }

    pub fn unsave_recipe(&self, ids: &mut Vec<String>, recipe_id: &str) -> bool {
        saved::unsave(self.storage(), ids, recipe_id)
    }
}
