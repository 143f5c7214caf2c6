//! Mock API Layer
//!
//! Frontend boundary to the simulated backend, organized by domain. Every
//! call that would hit the network settles after a fixed delay so the
//! pages exercise their loading states. The repository, user directory
//! and storage port are injected so a real backend can replace them
//! without touching the pages.

mod auth;
mod recipes;

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use send_wrapper::SendWrapper;
use recipe_core::auth::UserDirectory;
use recipe_core::{KeyValueStore, RecipeRepository};

/// Simulated network latency
const API_DELAY_MS: u32 = 1_000;

/// Handle to the injected mock backend, provided via context
#[derive(Clone)]
pub struct Api {
    repo: SendWrapper<Rc<dyn RecipeRepository>>,
    users: SendWrapper<Rc<UserDirectory>>,
    storage: SendWrapper<Rc<dyn KeyValueStore>>,
}

impl Api {
    pub fn new(
        repo: Rc<dyn RecipeRepository>,
        users: Rc<UserDirectory>,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            repo: SendWrapper::new(repo),
            users: SendWrapper::new(users),
            storage: SendWrapper::new(storage),
        }
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        &**self.storage
    }

    /// Fixed-delay stand-in for network latency
    async fn delay(&self) {
        TimeoutFuture::new(API_DELAY_MS).await;
    }

    /// Current time as an ISO-8601 string (timestamps are assigned here;
    /// the core cannot read the browser clock)
    fn now(&self) -> String {
        js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default()
    }
}
