//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod recipe;
mod user;

pub use entity::{DomainError, DomainResult, Entity};
pub use recipe::{Ingredient, Instruction, Recipe, RecipeDraft, RecipeUpdate};
pub use user::User;
