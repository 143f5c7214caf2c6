//! Saved Recipes Page

use leptos::prelude::*;

use crate::components::RecipeList;
use crate::context::use_auth;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SavedRecipesPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();

    let saved = Signal::derive(move || {
        let ids = store.saved_ids().get();
        store
            .recipes()
            .get()
            .into_iter()
            .filter(|recipe| ids.contains(&recipe.id))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page saved-recipes">
            <h1>"Saved recipes"</h1>
            {move || if auth.is_authenticated() {
                view! {
                    <RecipeList
                        recipes=saved
                        empty_message="Nothing saved yet. Browse and tap Save on a recipe you like."
                    />
                }.into_any()
            } else {
                view! {
                    <p class="auth-required">"Log in to see your saved recipes."</p>
                }.into_any()
            }}
        </div>
    }
}
