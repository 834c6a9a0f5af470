//! Login, registration and logout.
//!
//! Login is the only place the token store is written; logout clears it
//! locally without telling the backend.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ApiError;
use crate::net::api::Backend;
use crate::net::types::User;
use crate::util::token_store::TokenStore;

pub struct SessionPage<'a, B: Backend + ?Sized> {
    backend: &'a B,
    tokens: &'a TokenStore,
}

impl<'a, B: Backend + ?Sized> SessionPage<'a, B> {
    pub fn new(backend: &'a B, tokens: &'a TokenStore) -> Self {
        Self { backend, tokens }
    }

    /// Create the user. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the backend rejects the registration.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self.backend.register(email, password).await?;
        tracing::info!(email, "registered");
        Ok(response.data)
    }

    /// Exchange credentials for a token and cache the returned user.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if login is rejected or the store cannot be
    /// written. Nothing is stored on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self.backend.login(email, password).await?;
        self.tokens.set_token(&response.data.access_token)?;
        self.tokens.set_user(&response.data.user)?;
        tracing::info!(email, "logged in");
        Ok(response.data.user)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the store cannot be written.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.tokens.logout()?;
        Ok(())
    }

    /// Current user from the backend, refreshing the cached copy.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the store cannot be
    /// written.
    pub async fn whoami(&self) -> Result<User, ApiError> {
        let user = self.backend.me().await?.data;
        self.tokens.set_user(&user)?;
        Ok(user)
    }
}
