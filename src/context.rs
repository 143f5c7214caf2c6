//! Application Context
//!
//! Shared state provided via Leptos Context API: the current view (the app
//! is a single mounted tree with signal-switched pages, no URL router) and
//! the logged-in user.

use leptos::prelude::*;
use recipe_core::User;

/// Views the app can show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Recipes,
    Featured,
    RecipeDetail(String),
    Create,
    MyRecipes,
    Saved,
    Search(String),
    Login,
    Register,
    Profile,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    route: RwSignal<Route>,
    /// Trigger to reload recipes from the mock backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            route: RwSignal::new(Route::Home),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    /// Switch the visible page
    pub fn navigate(&self, route: Route) {
        self.route.set(route);
    }

    /// Trigger a reload of recipes
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Session state provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
}

impl AuthContext {
    pub fn new(initial: Option<User>) -> Self {
        Self {
            user: RwSignal::new(initial),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    pub fn set_user(&self, user: User) {
        self.user.set(Some(user));
    }

    pub fn clear(&self) {
        self.user.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
