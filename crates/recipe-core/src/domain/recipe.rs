//! Recipe Entity
//!
//! A recipe with its ingredient list (denominated per the base serving
//! count) and ordered instruction steps, some of which carry a countdown
//! timer duration in minutes.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A single ingredient line.
///
/// `quantity` is denominated per the owning recipe's base serving count;
/// `unit` may be empty for countable ingredients ("4 Thai chilies").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// One instruction step. `timer_minutes` is present when the step wants a
/// countdown timer; fractional values are allowed ("stir-fry for 30 seconds"
/// is 0.5 minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub step: u32,
    pub description: String,
    #[serde(rename = "timer", skip_serializing_if = "Option::is_none")]
    pub timer_minutes: Option<f64>,
}

impl Instruction {
    pub fn new(step: u32, description: impl Into<String>, timer_minutes: Option<f64>) -> Self {
        Self {
            step,
            description: description.into(),
            timer_minutes,
        }
    }
}

/// A full recipe record as held by the recipe store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Base serving count the ingredient quantities are denominated in
    pub servings: u32,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    /// Id of the authoring user
    pub created_by: String,
    pub chef_name: String,
    /// Ids of users allowed to edit alongside the author
    pub collaborators: Vec<String>,
    pub is_public: bool,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Recipe {
    /// Whether the given user may edit this recipe (author or collaborator)
    pub fn can_edit(&self, user_id: &str) -> bool {
        self.created_by == user_id || self.collaborators.iter().any(|c| c == user_id)
    }
}

impl Entity for Recipe {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Everything the author supplies when creating a recipe.
/// Id and timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub servings: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub created_by: String,
    pub chef_name: String,
    pub is_public: bool,
    pub image: String,
}

/// Partial update for an existing recipe. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub servings: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<Instruction>>,
    pub is_public: Option<bool>,
    pub image: Option<String>,
}

impl RecipeUpdate {
    /// Apply the patch to a recipe in place, stamping `updated_at`.
    pub fn apply(self, recipe: &mut Recipe, now: &str) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(description) = self.description {
            recipe.description = description;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(prep_time) = self.prep_time {
            recipe.prep_time = prep_time;
        }
        if let Some(cook_time) = self.cook_time {
            recipe.cook_time = cook_time;
        }
        if let Some(tags) = self.tags {
            recipe.tags = tags;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
        if let Some(is_public) = self.is_public {
            recipe.is_public = is_public;
        }
        if let Some(image) = self.image {
            recipe.image = image;
        }
        recipe.updated_at = now.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::RecipeBuilder;

    #[test]
    fn test_can_edit() {
        let mut recipe = RecipeBuilder::new("1", "Test").created_by("1", "Chef Julia").build();
        recipe.collaborators.push("2".to_string());

        assert!(recipe.can_edit("1"));
        assert!(recipe.can_edit("2"));
        assert!(!recipe.can_edit("3"));
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut recipe = RecipeBuilder::new("1", "Original")
            .servings(4)
            .created_by("1", "Chef Julia")
            .build();

        let update = RecipeUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        update.apply(&mut recipe, "2023-07-01T00:00:00.000Z");

        assert_eq!(recipe.title, "Renamed");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.updated_at, "2023-07-01T00:00:00.000Z");
    }

    #[test]
    fn test_instruction_timer_serialization() {
        let step = Instruction::new(3, "Bake until golden.", Some(10.0));
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"timer\":10.0"));

        let untimed = Instruction::new(1, "Preheat oven.", None);
        let json = serde_json::to_string(&untimed).unwrap();
        assert!(!json.contains("timer"));
    }
}
