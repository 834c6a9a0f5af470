//! Session token and cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Set on login, read by the HTTP client before every request, cleared on
//! logout. There is no expiry tracking: a stale token surfaces as a 401 from
//! the next API call.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::Arc;

use super::storage::{MemoryStorage, Storage, StoreError};
use crate::net::types::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Token and user profile persisted in a [`Storage`] backend.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

impl TokenStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by process memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.storage.set_item(TOKEN_KEY, token)
    }

    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    pub fn token(&self) -> Result<Option<String>, StoreError> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    pub fn remove_token(&self) -> Result<(), StoreError> {
        self.storage.remove_item(TOKEN_KEY)
    }

    /// True iff a token is present. Storage failures count as absent.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Cache the user profile as JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    pub fn set_user(&self, user: &User) -> Result<(), StoreError> {
        let text = serde_json::to_string(user).map_err(|source| StoreError::Corrupt {
            path: USER_KEY.into(),
            source,
        })?;
        self.storage.set_item(USER_KEY, &text)
    }

    /// Cached user profile. A value that no longer parses reads as absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    pub fn user(&self) -> Result<Option<User>, StoreError> {
        let Some(text) = self.storage.get_item(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(user) => Ok(Some(user)),
            Err(error) => {
                tracing::warn!(%error, "ignoring unparseable cached user");
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    pub fn remove_user(&self) -> Result<(), StoreError> {
        self.storage.remove_item(USER_KEY)
    }

    /// Drop both token and cached user.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be written.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.remove_token()?;
        self.remove_user()
    }
}
