//! Auth API
//!
//! Simulated authentication calls against the mock user directory. A
//! successful login/register/profile-update persists the session through
//! the storage port so a reload stays logged in.

use recipe_core::{session, DomainResult, User};

use super::Api;

impl Api {
    /// Restore the persisted session, if any. Synchronous: runs before
    /// first render.
    pub fn load_session(&self) -> Option<User> {
        session::load(self.storage())
    }

    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        self.delay().await;
        let user = self.users.authenticate(email, password)?;
        session::save(self.storage(), &user);
        Ok(user)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        self.delay().await;
        let user = self.users.register(username, email, password)?;
        session::save(self.storage(), &user);
        Ok(user)
    }

    pub fn logout(&self) {
        session::clear(self.storage());
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        username: Option<&str>,
        email: Option<&str>,
    ) -> DomainResult<User> {
        self.delay().await;
        let user = self.users.update_profile(user_id, username, email)?;
        session::save(self.storage(), &user);
        Ok(user)
    }

    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        self.delay().await;
        self.users
            .change_password(user_id, current_password, new_password)
    }

    pub async fn delete_account(&self, user_id: &str) {
        self.delay().await;
        self.users.delete(user_id);
        session::clear(self.storage());
    }
}
