//! In-memory user table.

use dashmap::{DashMap, Entry};

use super::StoreError;
use crate::models::User;
use crate::token;

/// User table keyed by email.
///
/// Users are created on registration and never deleted. The bearer token is
/// rotated on every successful login, which implicitly invalidates the
/// previous one.
#[derive(Debug, Default)]
pub struct UserStore {
    by_email: DashMap<String, User>,
}

impl UserStore {
    /// Create a new user and issue their first token.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserExists` if the email is already registered.
    pub fn register(&self, email: &str, password: &str) -> Result<User, StoreError> {
        match self.by_email.entry(email.to_owned()) {
            Entry::Occupied(_) => Err(StoreError::UserExists),
            Entry::Vacant(slot) => {
                let user = User {
                    email: email.to_owned(),
                    password: password.to_owned(),
                    token: token::issue(email),
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    /// Verify credentials and rotate the user's bearer token.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidCredentials` for an unknown email or a
    /// wrong password; clients cannot tell the two apart.
    pub fn login(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let mut user = self
            .by_email
            .get_mut(email)
            .ok_or(StoreError::InvalidCredentials)?;
        if user.password != password {
            return Err(StoreError::InvalidCredentials);
        }
        user.token = token::issue(email);
        Ok(user.clone())
    }

    /// Resolve a user by exact token equality.
    ///
    /// Linear scan over the table; fine at fixture scale.
    #[must_use]
    pub fn find_by_token(&self, token: &str) -> Option<User> {
        self.by_email
            .iter()
            .find(|entry| entry.value().token == token)
            .map(|entry| entry.value().clone())
    }
}
