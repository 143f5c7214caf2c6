//! Mock User Directory
//!
//! In-process stand-in for an authentication backend. Holds the seeded
//! accounts plus any registered during the session; nothing here survives
//! a reload (the session itself is persisted separately, see
//! [`crate::session`]).

use std::cell::{Cell, RefCell};

use crate::domain::{DomainError, DomainResult, User};

struct UserRecord {
    user: User,
    password: String,
}

/// Directory of known users with password checks.
///
/// Interior mutability so the frontend can share one directory behind an
/// `Rc`; the app is single-threaded. Ids come from a monotonic counter
/// seeded past the demo accounts, so deleting an account never recycles
/// a live id into ownership checks or collaborator lists.
pub struct UserDirectory {
    users: RefCell<Vec<UserRecord>>,
    next_id: Cell<u64>,
}

impl UserDirectory {
    /// Directory seeded with the two demo accounts.
    pub fn with_mock_users() -> Self {
        Self {
            users: RefCell::new(vec![
                UserRecord {
                    user: User::new("1", "john_doe", "john@example.com"),
                    password: "password123".to_string(),
                },
                UserRecord {
                    user: User::new("2", "jane_smith", "jane@example.com"),
                    password: "password123".to_string(),
                },
            ]),
            next_id: Cell::new(3),
        }
    }

    /// Empty directory, for tests.
    pub fn empty() -> Self {
        Self {
            users: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    fn take_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id.to_string()
    }

    /// Check credentials, returning the public user record on success.
    pub fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|record| record.user.email == email && record.password == password)
            .map(|record| record.user.clone())
            .ok_or_else(|| DomainError::InvalidInput("Invalid email or password".to_string()))
    }

    /// Register a new account. Emails must be unique.
    pub fn register(&self, username: &str, email: &str, password: &str) -> DomainResult<User> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|record| record.user.email == email) {
            return Err(DomainError::Conflict("Email already in use".to_string()));
        }
        let user = User::new(self.take_id(), username, email);
        users.push(UserRecord {
            user: user.clone(),
            password: password.to_string(),
        });
        Ok(user)
    }

    /// Look up a user by email (collaborator invitations).
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .borrow()
            .iter()
            .find(|record| record.user.email == email)
            .map(|record| record.user.clone())
    }

    /// Update username and/or email, returning the new public record.
    pub fn update_profile(
        &self,
        user_id: &str,
        username: Option<&str>,
        email: Option<&str>,
    ) -> DomainResult<User> {
        let mut users = self.users.borrow_mut();
        let record = users
            .iter_mut()
            .find(|record| record.user.id == user_id)
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        if let Some(username) = username {
            record.user.username = username.to_string();
        }
        if let Some(email) = email {
            record.user.email = email.to_string();
        }
        Ok(record.user.clone())
    }

    /// Change a password after verifying the current one.
    pub fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut users = self.users.borrow_mut();
        let record = users
            .iter_mut()
            .find(|record| record.user.id == user_id)
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        if record.password != current_password {
            return Err(DomainError::InvalidInput(
                "Current password is incorrect".to_string(),
            ));
        }
        record.password = new_password.to_string();
        Ok(())
    }

    /// Remove an account. Missing accounts are ignored.
    pub fn delete(&self, user_id: &str) {
        self.users
            .borrow_mut()
            .retain(|record| record.user.id != user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_mock_user() {
        let directory = UserDirectory::with_mock_users();
        let user = directory
            .authenticate("john@example.com", "password123")
            .unwrap();
        assert_eq!(user.username, "john_doe");
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_authenticate_bad_credentials() {
        let directory = UserDirectory::with_mock_users();
        let err = directory
            .authenticate("john@example.com", "wrong")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_register_and_login() {
        let directory = UserDirectory::with_mock_users();
        let user = directory
            .register("new_chef", "chef@example.com", "secret")
            .unwrap();
        assert_eq!(user.id, "3");

        let logged_in = directory.authenticate("chef@example.com", "secret").unwrap();
        assert_eq!(logged_in, user);
    }

    #[test]
    fn test_register_duplicate_email() {
        let directory = UserDirectory::with_mock_users();
        let err = directory
            .register("imposter", "john@example.com", "secret")
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn test_update_profile() {
        let directory = UserDirectory::with_mock_users();
        let updated = directory
            .update_profile("1", Some("johnny"), None)
            .unwrap();
        assert_eq!(updated.username, "johnny");
        assert_eq!(updated.email, "john@example.com");
    }

    #[test]
    fn test_change_password_checks_current() {
        let directory = UserDirectory::with_mock_users();
        let err = directory
            .change_password("1", "wrong", "newpass")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        directory
            .change_password("1", "password123", "newpass")
            .unwrap();
        assert!(directory.authenticate("john@example.com", "newpass").is_ok());
    }

    #[test]
    fn test_ids_are_not_recycled_after_delete() {
        let directory = UserDirectory::with_mock_users();
        directory.delete("1");

        let newcomer = directory
            .register("new_chef", "chef@example.com", "secret")
            .unwrap();
        assert_eq!(newcomer.id, "3");

        let jane = directory.find_by_email("jane@example.com").unwrap();
        assert_ne!(newcomer.id, jane.id);
    }

    #[test]
    fn test_delete_account() {
        let directory = UserDirectory::with_mock_users();
        directory.delete("1");
        assert!(directory.find_by_email("john@example.com").is_none());
    }
}
