//! UI Components
//!
//! Reusable Leptos components.

mod footer;
mod navbar;
mod recipe_card;
mod recipe_list;
mod recipe_timer;
pub mod toast;

pub use footer::Footer;
pub use navbar::Navbar;
pub use recipe_card::RecipeCard;
pub use recipe_list::RecipeList;
pub use recipe_timer::RecipeTimer;
pub use toast::{use_toasts, Toasts};
