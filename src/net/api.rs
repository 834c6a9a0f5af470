//! Top-level API client and the backend seam used by pages.
//!
//! DESIGN
//! ======
//! `ApiClient` groups the per-resource modules behind one shared
//! `HttpClient`. Pages depend on the `Backend` trait rather than the concrete
//! client so their load/mutate/reload contract can be exercised with a
//! recording double.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::accounts::AccountsApi;
use super::auth::AuthApi;
use super::guides::GuidesApi;
use super::http::HttpClient;
use super::quota::QuotaApi;
use super::types::{
    Account, AccountCreate, AccountQuota, AccountVerifyResponse, ApiResponse, Dashboard, GuideLookup, Health,
    PlatformSummary, Recommendations, Schedule, TokenResponse, User, UserUpdate,
};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::util::storage::FileStorage;
use crate::util::token_store::TokenStore;

pub const HEALTH_PATH: &str = "/health";

/// Every backend call a page can make. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<ApiResponse<User>, ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<TokenResponse>, ApiError>;
    async fn me(&self) -> Result<ApiResponse<User>, ApiError>;
    async fn update_me(&self, update: &UserUpdate) -> Result<ApiResponse<User>, ApiError>;

    async fn list_accounts(&self) -> Result<ApiResponse<Vec<Account>>, ApiError>;
    async fn get_account(&self, id: i64) -> Result<ApiResponse<Account>, ApiError>;
    async fn create_account(&self, body: &AccountCreate) -> Result<ApiResponse<Account>, ApiError>;
    async fn delete_account(&self, id: i64) -> Result<ApiResponse<()>, ApiError>;
    async fn verify_account(&self, id: i64) -> Result<ApiResponse<AccountVerifyResponse>, ApiError>;

    async fn dashboard(&self) -> Result<ApiResponse<Dashboard>, ApiError>;
    async fn recommendations(&self) -> Result<ApiResponse<Recommendations>, ApiError>;
    async fn schedule(&self) -> Result<ApiResponse<Schedule>, ApiError>;
    async fn account_quota(&self, id: i64) -> Result<ApiResponse<AccountQuota>, ApiError>;

    async fn list_guides(&self) -> Result<ApiResponse<Vec<PlatformSummary>>, ApiError>;
    async fn get_guide(&self, platform_id: &str) -> Result<ApiResponse<GuideLookup>, ApiError>;
}

/// Concrete client talking to the REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, tokens: TokenStore) -> Result<Self, ApiError> {
        Ok(Self { http: HttpClient::new(base_url, tokens)? })
    }

    /// Client with a file-backed token store under the configured home.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let tokens = TokenStore::new(FileStorage::new(config.session_path()));
        Self::new(&config.base_url, tokens)
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        self.http.tokens()
    }

    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    #[must_use]
    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(&self.http)
    }

    #[must_use]
    pub fn quota(&self) -> QuotaApi<'_> {
        QuotaApi::new(&self.http)
    }

    #[must_use]
    pub fn guides(&self) -> GuidesApi<'_> {
        GuidesApi::new(&self.http)
    }

    /// `GET /health` liveness probe.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<ApiResponse<Health>, ApiError> {
        self.http.get(HEALTH_PATH).await
    }
}

#[async_trait::async_trait]
impl Backend for ApiClient {
    async fn register(&self, email: &str, password: &str) -> Result<ApiResponse<User>, ApiError> {
        self.auth().register(email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<TokenResponse>, ApiError> {
        self.auth().login(email, password).await
    }

    async fn me(&self) -> Result<ApiResponse<User>, ApiError> {
        self.auth().me().await
    }

    async fn update_me(&self, update: &UserUpdate) -> Result<ApiResponse<User>, ApiError> {
        self.auth().update_me(update).await
    }

    async fn list_accounts(&self) -> Result<ApiResponse<Vec<Account>>, ApiError> {
        self.accounts().list().await
    }

    async fn get_account(&self, id: i64) -> Result<ApiResponse<Account>, ApiError> {
        self.accounts().get(id).await
    }

    async fn create_account(&self, body: &AccountCreate) -> Result<ApiResponse<Account>, ApiError> {
        self.accounts().create(body).await
    }

    async fn delete_account(&self, id: i64) -> Result<ApiResponse<()>, ApiError> {
        self.accounts().delete(id).await
    }

    async fn verify_account(&self, id: i64) -> Result<ApiResponse<AccountVerifyResponse>, ApiError> {
        self.accounts().verify(id).await
    }

    async fn dashboard(&self) -> Result<ApiResponse<Dashboard>, ApiError> {
        self.quota().dashboard().await
    }

    async fn recommendations(&self) -> Result<ApiResponse<Recommendations>, ApiError> {
        self.quota().recommendations().await
    }

    async fn schedule(&self) -> Result<ApiResponse<Schedule>, ApiError> {
        self.quota().schedule().await
    }

    async fn account_quota(&self, id: i64) -> Result<ApiResponse<AccountQuota>, ApiError> {
        self.quota().account(id).await
    }

    async fn list_guides(&self) -> Result<ApiResponse<Vec<PlatformSummary>>, ApiError> {
        self.guides().list().await
    }

    async fn get_guide(&self, platform_id: &str) -> Result<ApiResponse<GuideLookup>, ApiError> {
        self.guides().get(platform_id).await
    }
}
