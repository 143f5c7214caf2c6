//! Featured Recipes Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::Recipe;

use crate::api::Api;
use crate::components::RecipeList;

#[component]
pub fn FeaturedPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            set_recipes.set(api.featured_recipes().await);
            set_loading.set(false);
        });
    });

    view! {
        <div class="page featured">
            <h1>"Featured recipes"</h1>
            {move || if loading.get() {
                view! { <p class="loading">"Loading featured recipes..."</p> }.into_any()
            } else {
                view! { <RecipeList recipes=recipes/> }.into_any()
            }}
        </div>
    }
}
