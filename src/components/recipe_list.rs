//! Recipe List Component
//!
//! Grid of recipe cards with an empty-state message.

use leptos::prelude::*;
use recipe_core::Recipe;

use crate::components::RecipeCard;

#[component]
pub fn RecipeList(
    #[prop(into)] recipes: Signal<Vec<Recipe>>,
    #[prop(default = "No recipes found.")] empty_message: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if recipes.with(|list| list.is_empty()) {
                view! { <p class="empty-state">{empty_message}</p> }.into_any()
            } else {
                view! {
                    <div class="recipe-grid">
                        <For
                            each=move || recipes.get()
                            key=|recipe| recipe.id.clone()
                            children=move |recipe| view! { <RecipeCard recipe=recipe/> }
                        />
                    </div>
                }.into_any()
            }
        }}
    }
}
