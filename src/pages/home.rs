//! Home Page
//!
//! Hero section plus a short shelf of the latest recipes.

use leptos::prelude::*;

use crate::components::RecipeList;
use crate::context::{use_app_context, Route};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let latest = Signal::derive(move || {
        store
            .recipes()
            .get()
            .into_iter()
            .take(3)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page home">
            <section class="hero">
                <h1>"Cook something great today"</h1>
                <p>
                    "Browse community recipes, scale ingredients to your table size, \
                     and let step timers keep you on track."
                </p>
                <div class="hero-actions">
                    <button class="btn primary" on:click=move |_| ctx.navigate(Route::Recipes)>
                        "Browse recipes"
                    </button>
                    <button class="btn" on:click=move |_| ctx.navigate(Route::Create)>
                        "Share your own"
                    </button>
                </div>
            </section>

            <section>
                <h2>"Latest recipes"</h2>
                <RecipeList recipes=latest empty_message="The kitchen is still warming up..."/>
            </section>
        </div>
    }
}
