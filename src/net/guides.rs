//! `/api/guides` endpoints: the read-only platform catalog.

use super::http::HttpClient;
use super::types::{ApiResponse, GuideLookup, PlatformSummary};
use crate::error::ApiError;

pub const GUIDES_PATH: &str = "/api/guides";

/// `platform_id` is user input, so it is encoded as a single path segment.
pub(crate) fn guide_path(platform_id: &str) -> String {
    format!("{GUIDES_PATH}/{}", urlencoding::encode(platform_id))
}

#[derive(Debug, Clone, Copy)]
pub struct GuidesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> GuidesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn list(&self) -> Result<ApiResponse<Vec<PlatformSummary>>, ApiError> {
        self.http.get(GUIDES_PATH).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn get(&self, platform_id: &str) -> Result<ApiResponse<GuideLookup>, ApiError> {
        self.http.get(&guide_path(platform_id)).await
    }
}
