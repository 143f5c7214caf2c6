//! Navigation Bar Component
//!
//! Brand, primary navigation, recipe search box, and the auth controls.

use leptos::prelude::*;

use crate::api::Api;
use crate::components::toast::use_toasts;
use crate::context::{use_app_context, use_auth, Route};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();
    // Held in local storage so the logout handler stays Copy
    let api = StoredValue::new_local(expect_context::<Api>());
    let toasts = use_toasts();
    let (query, set_query) = signal(String::new());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        let q = q.trim();
        if q.is_empty() {
            return;
        }
        ctx.navigate(Route::Search(q.to_string()));
        set_query.set(String::new());
    };

    let on_logout = move |_| {
        api.with_value(|api| api.logout());
        auth.clear();
        toasts.success("Logged out successfully!");
        ctx.navigate(Route::Home);
    };

    view! {
        <nav class="navbar">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Home)>
                "RecipeHub"
            </button>

            <div class="nav-links">
                <button class="nav-link" on:click=move |_| ctx.navigate(Route::Recipes)>
                    "Recipes"
                </button>
                <button class="nav-link" on:click=move |_| ctx.navigate(Route::Featured)>
                    "Featured"
                </button>
            </div>

            <form class="nav-search" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Search recipes..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>

            {move || if auth.is_authenticated() {
                view! {
                    <div class="nav-auth">
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Create)>
                            "Create"
                        </button>
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::MyRecipes)>
                            "My Recipes"
                        </button>
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Saved)>
                            "Saved"
                        </button>
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Profile)>
                            {move || auth.user().map(|user| user.username).unwrap_or_default()}
                        </button>
                        <button class="nav-link" on:click=on_logout>"Log out"</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="nav-auth">
                        <button class="nav-link" on:click=move |_| ctx.navigate(Route::Login)>
                            "Log in"
                        </button>
                        <button class="nav-link primary" on:click=move |_| ctx.navigate(Route::Register)>
                            "Sign up"
                        </button>
                    </div>
                }.into_any()
            }}
        </nav>
    }
}
