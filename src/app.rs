//! Application Shell
//!
//! Wires the mock backend together, provides the shared contexts, and
//! switches pages on the route signal.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_core::auth::UserDirectory;
use recipe_core::seed::seed_recipes;
use recipe_core::InMemoryRecipeRepository;

use crate::api::Api;
use crate::components::toast::ToastContext;
use crate::components::{Footer, Navbar, Toasts};
use crate::context::{AppContext, AuthContext, Route};
use crate::pages::{
    CreateRecipePage, FeaturedPage, HomePage, LoginPage, MyRecipesPage, ProfilePage,
    RecipeDetailPage, RecipesPage, RegisterPage, SavedRecipesPage, SearchPage,
};
use crate::storage::BrowserStorage;
use crate::store::{store_set_recipes, AppState};

#[component]
pub fn App() -> impl IntoView {
    let storage = Rc::new(BrowserStorage::new());
    let repo = Rc::new(InMemoryRecipeRepository::with_recipes(seed_recipes()));
    let users = Rc::new(UserDirectory::with_mock_users());
    let api = Api::new(repo, users, storage);

    let ctx = AppContext::new(signal(0));
    let auth = AuthContext::new(api.load_session());
    let store = Store::new(AppState {
        recipes: Vec::new(),
        saved_ids: api.load_saved(),
    });
    let toasts = ToastContext::new();

    provide_context(api.clone());
    provide_context(ctx);
    provide_context(auth);
    provide_context(store);
    provide_context(toasts);

    // Load the catalog on mount and again whenever a reload is requested
    Effect::new(move |_| {
        ctx.reload_trigger.get();
        let api = api.clone();
        spawn_local(async move {
            let recipes = api.list_recipes().await;
            web_sys::console::log_1(&format!("[APP] Loaded {} recipes", recipes.len()).into());
            store_set_recipes(&store, recipes);
        });
    });

    view! {
        <div class="app">
            <Navbar/>
            <main>
                {move || match ctx.route() {
                    Route::Home => view! { <HomePage/> }.into_any(),
                    Route::Recipes => view! { <RecipesPage/> }.into_any(),
                    Route::Featured => view! { <FeaturedPage/> }.into_any(),
                    Route::RecipeDetail(id) => view! { <RecipeDetailPage id=id/> }.into_any(),
                    Route::Create => view! { <CreateRecipePage/> }.into_any(),
                    Route::MyRecipes => view! { <MyRecipesPage/> }.into_any(),
                    Route::Saved => view! { <SavedRecipesPage/> }.into_any(),
                    Route::Search(query) => view! { <SearchPage query=query/> }.into_any(),
                    Route::Login => view! { <LoginPage/> }.into_any(),
                    Route::Register => view! { <RegisterPage/> }.into_any(),
                    Route::Profile => view! { <ProfilePage/> }.into_any(),
                }}
            </main>
            <Footer/>
            <Toasts/>
        </div>
    }
}
