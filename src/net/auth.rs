//! `/api/auth` endpoints.

use super::http::HttpClient;
use super::types::{ApiResponse, Credentials, TokenResponse, User, UserUpdate};
use crate::error::ApiError;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ME_PATH: &str = "/api/auth/me";

#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn register(&self, email: &str, password: &str) -> Result<ApiResponse<User>, ApiError> {
        let body = Credentials { email: email.to_owned(), password: password.to_owned() };
        self.http.post(REGISTER_PATH, &body).await
    }

    /// `POST /api/auth/login`. Does not touch the token store.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<TokenResponse>, ApiError> {
        let body = Credentials { email: email.to_owned(), password: password.to_owned() };
        self.http.post(LOGIN_PATH, &body).await
    }

    /// `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn me(&self) -> Result<ApiResponse<User>, ApiError> {
        self.http.get(ME_PATH).await
    }

    /// `PATCH /api/auth/me` with a partial update.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn update_me(&self, update: &UserUpdate) -> Result<ApiResponse<User>, ApiError> {
        self.http.patch(ME_PATH, update).await
    }
}
