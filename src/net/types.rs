//! Wire DTOs for the Open Crow REST backend.
//!
//! DESIGN
//! ======
//! The backend owns every entity; these structs mirror its JSON so the client
//! can render fields by name. No quota math is derived from them. Timestamps
//! stay as the backend's ISO-8601 strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Decoded response envelope: HTTP status plus body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Discard the envelope and keep the body.
    pub fn into_data(self) -> T {
        self.data
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Email/password pair for register and login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated user and their notification preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Telegram chat that receives quota reminders, if linked.
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
    pub preferred_language: String,
    pub timezone: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: String,
}

/// Partial profile update; absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Login result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// One quota bucket on a connected platform account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuotaInfo {
    /// Bucket name, e.g. `"messages_per_3h"`.
    pub quota_type: String,
    pub total_quota: f64,
    pub used_quota: f64,
    #[serde(default)]
    pub remaining_quota: f64,
    pub reset_at: String,
    pub usage_percentage: f64,
}

/// A user's credential binding to one platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub platform_id: String,
    #[serde(default)]
    pub account_identifier: Option<String>,
    /// Masked key, e.g. `"sk-...abcd"`. The full key never leaves the backend.
    pub api_key_preview: String,
    pub is_verified: bool,
    #[serde(default)]
    pub last_verified_at: Option<String>,
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quotas: Vec<QuotaInfo>,
}

/// Body for connecting a new platform account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreate {
    pub platform_id: String,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_identifier: Option<String>,
}

/// Outcome of an account verification request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountVerifyResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

// =============================================================================
// QUOTA
// =============================================================================

/// Aggregated usage for one connected platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformQuota {
    pub platform_id: String,
    pub platform_name: String,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub quotas: Vec<QuotaInfo>,
    /// Backend-computed urgency in `0..=100`; higher means use sooner.
    pub urgency_score: f64,
    pub recommendation: String,
    #[serde(default)]
    pub time_until_reset: Option<String>,
}

/// The dashboard snapshot. Each load replaces the previous one wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_platforms: u32,
    pub connected_accounts: u32,
    pub total_quota_usage_percentage: f64,
    #[serde(default)]
    pub platforms: Vec<PlatformQuota>,
    pub last_updated: String,
}

impl Dashboard {
    /// True when the user has nothing connected and no cards should render.
    #[must_use]
    pub fn has_no_accounts(&self) -> bool {
        self.connected_accounts == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub recommended_platform: Option<PlatformQuota>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub alternatives: Vec<PlatformQuota>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time_slot: String,
    pub platform_id: String,
    pub platform_name: String,
    pub action: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// `"daily"` or `"weekly"`.
    pub schedule_type: String,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    pub generated_at: String,
}

/// Per-account quota detail.
///
/// The backend reports an unknown account in-band (status 200 with an
/// `error` field) rather than with a 404.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountQuota {
    Found {
        account_id: i64,
        platform_id: String,
        platform_name: String,
        #[serde(default)]
        quotas: Vec<QuotaInfo>,
    },
    Missing {
        error: String,
    },
}

// =============================================================================
// GUIDES
// =============================================================================

/// Catalog entry for a supported platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub platform_id: String,
    pub platform_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub signup_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Full signup guide for one platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub platform_id: String,
    pub platform_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub signup_url: String,
    #[serde(default)]
    pub api_docs_url: String,
    /// Platform quota definitions, passed through untouched.
    #[serde(default)]
    pub quotas: Vec<serde_json::Value>,
    #[serde(default)]
    pub steps: Vec<GuideStep>,
    #[serde(default)]
    pub platform_tips: Vec<String>,
}

/// Guide lookup result; unknown platforms come back in-band as `{error}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GuideLookup {
    Found(Box<Guide>),
    Missing { error: String },
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

fn default_true() -> bool {
    true
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
