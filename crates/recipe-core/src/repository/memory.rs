//! In-Memory Recipe Repository
//!
//! Mock backend: a seeded recipe list behind interior mutability, shared
//! by the frontend behind an `Rc`. Ids come from a monotonic counter
//! seeded past the fixtures, so deleting a recipe never recycles an id.

use std::cell::{Cell, RefCell};

use crate::domain::{DomainError, DomainResult, Recipe, RecipeDraft, RecipeUpdate};

use super::traits::RecipeRepository;

pub struct InMemoryRecipeRepository {
    recipes: RefCell<Vec<Recipe>>,
    next_id: Cell<u64>,
}

impl InMemoryRecipeRepository {
    /// Empty repository, for tests.
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Repository pre-populated with the given recipes. The id counter
    /// starts past the largest numeric id present.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let next_id = recipes
            .iter()
            .filter_map(|recipe| recipe.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            recipes: RefCell::new(recipes),
            next_id: Cell::new(next_id),
        }
    }

    fn take_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id.to_string()
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn get(&self, id: &str) -> Option<Recipe> {
        self.recipes
            .borrow()
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
    }

    fn list(&self) -> Vec<Recipe> {
        self.recipes.borrow().clone()
    }

    fn search(&self, query: &str) -> Vec<Recipe> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.recipes
            .borrow()
            .iter()
            .filter(|recipe| {
                recipe.title.to_lowercase().contains(&needle)
                    || recipe.description.to_lowercase().contains(&needle)
                    || recipe
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn create(&self, draft: RecipeDraft, now: &str) -> Recipe {
        let recipe = Recipe {
            id: self.take_id(),
            title: draft.title,
            description: draft.description,
            servings: draft.servings,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            created_by: draft.created_by,
            chef_name: draft.chef_name,
            collaborators: Vec::new(),
            is_public: draft.is_public,
            image: draft.image,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        };
        self.recipes.borrow_mut().push(recipe.clone());
        recipe
    }

    fn update(&self, id: &str, update: RecipeUpdate, now: &str) -> DomainResult<Recipe> {
        let mut recipes = self.recipes.borrow_mut();
        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| DomainError::NotFound("Recipe not found".to_string()))?;
        update.apply(recipe, now);
        Ok(recipe.clone())
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        let mut recipes = self.recipes.borrow_mut();
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);
        if recipes.len() == before {
            return Err(DomainError::NotFound("Recipe not found".to_string()));
        }
        Ok(())
    }

    fn add_collaborator(&self, recipe_id: &str, user_id: &str, now: &str) -> DomainResult<Recipe> {
        let mut recipes = self.recipes.borrow_mut();
        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == recipe_id)
            .ok_or_else(|| DomainError::NotFound("Recipe not found".to_string()))?;
        if recipe.collaborators.iter().any(|c| c == user_id) {
            return Err(DomainError::Conflict(
                "User is already a collaborator".to_string(),
            ));
        }
        recipe.collaborators.push(user_id.to_string());
        recipe.updated_at = now.to_string();
        Ok(recipe.clone())
    }

    fn remove_collaborator(
        &self,
        recipe_id: &str,
        user_id: &str,
        now: &str,
    ) -> DomainResult<Recipe> {
        let mut recipes = self.recipes.borrow_mut();
        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == recipe_id)
            .ok_or_else(|| DomainError::NotFound("Recipe not found".to_string()))?;
        let before = recipe.collaborators.len();
        recipe.collaborators.retain(|c| c != user_id);
        if recipe.collaborators.len() == before {
            return Err(DomainError::InvalidInput(
                "User is not a collaborator".to_string(),
            ));
        }
        recipe.updated_at = now.to_string();
        Ok(recipe.clone())
    }
}
