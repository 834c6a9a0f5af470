//! Error types shared by the HTTP client, API modules and token store.
//!
//! There is no domain taxonomy here: every failure is either transport,
//! a non-success HTTP status, an undecodable body, or local storage.

use crate::util::storage::StoreError;

/// Errors produced by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The local token store failed.
    #[error("token store failed: {0}")]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// HTTP status of the failure, when the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Storage(_) => None,
        }
    }

    /// True when the backend rejected the stored credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
