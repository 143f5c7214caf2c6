//! Pages
//!
//! One component per view; the app shell switches between them via the
//! route signal.

mod create_recipe;
mod featured;
mod home;
mod login;
mod my_recipes;
mod profile;
mod recipe_detail;
mod recipes;
mod register;
mod saved_recipes;
mod search;

pub use create_recipe::CreateRecipePage;
pub use featured::FeaturedPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_recipes::MyRecipesPage;
pub use profile::ProfilePage;
pub use recipe_detail::RecipeDetailPage;
pub use recipes::RecipesPage;
pub use register::RegisterPage;
pub use saved_recipes::SavedRecipesPage;
pub use search::SearchPage;
