//! My Recipes Page
//!
//! Recipes the logged-in user owns or collaborates on.

use leptos::prelude::*;

use crate::components::RecipeList;
use crate::context::{use_app_context, use_auth, Route};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MyRecipesPage() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();
    let store = use_app_store();

    let mine = Signal::derive(move || {
        let Some(user) = auth.user() else {
            return Vec::new();
        };
        store
            .recipes()
            .get()
            .into_iter()
            .filter(|recipe| recipe.can_edit(&user.id))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page my-recipes">
            {move || if auth.is_authenticated() {
                view! {
                    <div>
                        <div class="page-header">
                            <h1>"My recipes"</h1>
                            <button class="btn primary" on:click=move |_| ctx.navigate(Route::Create)>
                                "New recipe"
                            </button>
                        </div>
                        <RecipeList
                            recipes=mine
                            empty_message="You have not shared any recipes yet."
                        />
                    </div>
                }.into_any()
            } else {
                view! {
                    <p class="auth-required">
                        "Log in to see your recipes."
                    </p>
                }.into_any()
            }}
        </div>
    }
}
