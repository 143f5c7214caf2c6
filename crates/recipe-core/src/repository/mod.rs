//! Repository Layer
//!
//! Abstract recipe store plus the in-memory implementation backing the
//! mock API. The host injects a `RecipeRepository`, so a real backend can
//! replace the mock without touching the scaler/timer core.

mod memory;
mod tests;
mod traits;

pub use memory::InMemoryRecipeRepository;
pub use traits::RecipeRepository;
