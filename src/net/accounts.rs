//! `/api/accounts` endpoints.

use super::http::HttpClient;
use super::types::{Account, AccountCreate, AccountVerifyResponse, ApiResponse};
use crate::error::ApiError;

pub const ACCOUNTS_PATH: &str = "/api/accounts";

pub(crate) fn account_path(id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{id}")
}

pub(crate) fn verify_path(id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{id}/verify")
}

#[derive(Debug, Clone, Copy)]
pub struct AccountsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AccountsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Account>>, ApiError> {
        self.http.get(ACCOUNTS_PATH).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn get(&self, id: i64) -> Result<ApiResponse<Account>, ApiError> {
        self.http.get(&account_path(id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn create(&self, body: &AccountCreate) -> Result<ApiResponse<Account>, ApiError> {
        self.http.post(ACCOUNTS_PATH, body).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, ApiError> {
        self.http.delete(&account_path(id)).await
    }

    /// Ask the backend to re-check the stored key.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected. A key the
    /// backend could not verify is a successful response with `success: false`.
    pub async fn verify(&self, id: i64) -> Result<ApiResponse<AccountVerifyResponse>, ApiError> {
        self.http.post_empty(&verify_path(id)).await
    }
}
