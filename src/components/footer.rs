//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"RecipeHub: share, scale and cook your favorite recipes."</span>
        </footer>
    }
}
