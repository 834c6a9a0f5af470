//! Shared HTTP sender for every API module.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `reqwest::Client` per process, bound to the backend origin. Before a
//! request leaves, `authorize` reads the token store and attaches the bearer
//! credential when a token is present; without one the request goes out
//! unauthenticated and the backend decides.
//!
//! ERROR HANDLING
//! ==============
//! No retries and no timeouts are configured. Non-2xx answers become
//! `ApiError::Status` carrying the backend's `detail` text when it sent one.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiResponse;
use crate::config::normalize_base_url;
use crate::error::ApiError;
use crate::util::token_store::TokenStore;

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl HttpClient {
    /// Build the shared client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str, tokens: TokenStore) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, base_url: normalize_base_url(base_url), tokens })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request with the current credential applied.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the token store cannot be read.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        tracing::debug!(%method, path, "api request");
        self.authorize(self.http.request(method, self.url(path)))
    }

    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match self.tokens.token()? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(self.request(Method::GET, path)?).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path)?.json(body)).await
    }

    /// POST without a body, for action sub-resources.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(self.request(Method::POST, path)?).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PATCH, path)?.json(body)).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse<()>, ApiError> {
        self.send(self.request(Method::DELETE, path)?).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<ApiResponse<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!(status, "api request rejected");
            return Err(ApiError::Status { status, message: error_message(&text) });
        }

        Ok(ApiResponse { status, data: decode_body(&text)? })
    }
}

/// Decode a success body; an empty body decodes as JSON `null` so `()` and
/// `Option<T>` responses work for 204 answers.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    if text.trim().is_empty() {
        serde_json::from_str("null")
    } else {
        serde_json::from_str(text)
    }
}

/// Human-readable message for a rejected request.
fn error_message(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "empty response".to_owned();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => trimmed.to_owned(),
        },
        _ => trimmed.to_owned(),
    }
}
