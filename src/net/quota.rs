//! `/api/quota` endpoints. All figures are computed server-side.

use super::http::HttpClient;
use super::types::{AccountQuota, ApiResponse, Dashboard, Recommendations, Schedule};
use crate::error::ApiError;

pub const DASHBOARD_PATH: &str = "/api/quota/dashboard";
pub const RECOMMENDATIONS_PATH: &str = "/api/quota/recommendations";
pub const SCHEDULE_PATH: &str = "/api/quota/schedule";

pub(crate) fn account_quota_path(id: i64) -> String {
    format!("/api/quota/{id}")
}

#[derive(Debug, Clone, Copy)]
pub struct QuotaApi<'a> {
    http: &'a HttpClient,
}

impl<'a> QuotaApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn dashboard(&self) -> Result<ApiResponse<Dashboard>, ApiError> {
        self.http.get(DASHBOARD_PATH).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn recommendations(&self) -> Result<ApiResponse<Recommendations>, ApiError> {
        self.http.get(RECOMMENDATIONS_PATH).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn schedule(&self) -> Result<ApiResponse<Schedule>, ApiError> {
        self.http.get(SCHEDULE_PATH).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn account(&self, id: i64) -> Result<ApiResponse<AccountQuota>, ApiError> {
        self.http.get(&account_quota_path(id)).await
    }
}
