//! Browse Recipes Page
//!
//! The whole public catalog with an instant client-side filter.

use leptos::prelude::*;

use crate::components::RecipeList;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipesPage() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(String::new());

    let recipes = Signal::derive(move || {
        let needle = filter.get().trim().to_lowercase();
        store
            .recipes()
            .get()
            .into_iter()
            .filter(|recipe| recipe.is_public)
            .filter(|recipe| {
                needle.is_empty()
                    || recipe.title.to_lowercase().contains(&needle)
                    || recipe.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page recipes">
            <h1>"All recipes"</h1>
            <input
                class="filter-input"
                type="text"
                placeholder="Filter by title or tag..."
                prop:value=move || filter.get()
                on:input=move |ev| set_filter.set(event_target_value(&ev))
            />
            <RecipeList recipes=recipes/>
        </div>
    }
}
