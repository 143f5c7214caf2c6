//! Search Results Page
//!
//! Runs the query against the mock backend; a new search from the navbar
//! remounts this page with the new query.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::Recipe;

use crate::api::Api;
use crate::components::RecipeList;

#[component]
pub fn SearchPage(query: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let query = StoredValue::new(query);
    let (results, set_results) = signal(Vec::<Recipe>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            set_results.set(api.search_recipes(&query.get_value()).await);
            set_loading.set(false);
        });
    });

    view! {
        <div class="page search-results">
            <h1>{move || format!("Results for \"{}\"", query.get_value())}</h1>
            {move || if loading.get() {
                view! { <p class="loading">"Searching..."</p> }.into_any()
            } else {
                view! {
                    <RecipeList
                        recipes=results
                        empty_message="No recipes match your search."
                    />
                }.into_any()
            }}
        </div>
    }
}
