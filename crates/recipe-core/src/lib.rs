//! RecipeHub Domain Core
//!
//! Pure Rust core for the RecipeHub frontend: domain entities, ingredient
//! scaling, step countdown timers, repository and persistence ports.
//! No browser or framework dependencies, so everything here is testable
//! with a plain `cargo test`.

pub mod auth;
pub mod domain;
pub mod repository;
pub mod saved;
pub mod scale;
pub mod seed;
pub mod session;
pub mod storage;
pub mod timer;

pub use domain::{
    DomainError, DomainResult, Entity, Ingredient, Instruction, Recipe, RecipeDraft,
    RecipeUpdate, User,
};
pub use repository::{InMemoryRecipeRepository, RecipeRepository};
pub use scale::scale_ingredients;
pub use storage::{KeyValueStore, MemoryStore};
pub use timer::{StepTimer, TimerEvent, TimerState};
