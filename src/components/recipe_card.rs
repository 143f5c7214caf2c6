//! Recipe Card Component
//!
//! Compact catalog entry; clicking opens the recipe detail view.

use leptos::prelude::*;
use recipe_core::Recipe;

use crate::context::{use_app_context, Route};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_app_context();
    let id = recipe.id.clone();
    let total_minutes = recipe.prep_time + recipe.cook_time;

    view! {
        <div class="recipe-card" on:click=move |_| ctx.navigate(Route::RecipeDetail(id.clone()))>
            <img class="recipe-card-image" src=recipe.image.clone() alt=recipe.title.clone()/>
            <div class="recipe-card-body">
                <h3>{recipe.title.clone()}</h3>
                <p class="recipe-card-chef">{format!("By {}", recipe.chef_name)}</p>
                <p class="recipe-card-meta">
                    {format!("{} min | {} servings", total_minutes, recipe.servings)}
                </p>
                <div class="tag-row">
                    {recipe.tags.iter().map(|tag| view! {
                        <span class="tag">{tag.clone()}</span>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
