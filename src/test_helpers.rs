//! Fixtures and doubles shared by unit tests.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::ApiError;
use crate::net::api::Backend;
use crate::net::types::{
    Account, AccountCreate, AccountQuota, AccountVerifyResponse, ApiResponse, Dashboard, Guide, GuideLookup,
    GuideStep, PlatformQuota, PlatformSummary, QuotaInfo, Recommendations, Schedule, ScheduleItem, TokenResponse,
    User, UserUpdate,
};
use crate::util::prompt::Prompt;

// =============================================================================
// FIXTURES
// =============================================================================

pub fn user() -> User {
    User {
        id: 1,
        email: "crow@example.com".to_owned(),
        telegram_chat_id: None,
        preferred_language: "en".to_owned(),
        timezone: "UTC".to_owned(),
        is_active: true,
        created_at: "2025-01-01T00:00:00".to_owned(),
    }
}

pub fn quota(quota_type: &str, used: f64, total: f64) -> QuotaInfo {
    let usage_percentage = if total > 0.0 { used / total * 100.0 } else { 0.0 };
    QuotaInfo {
        quota_type: quota_type.to_owned(),
        total_quota: total,
        used_quota: used,
        remaining_quota: total - used,
        reset_at: "2025-01-02T00:00:00".to_owned(),
        usage_percentage,
    }
}

pub fn account(id: i64, platform_id: &str, is_verified: bool) -> Account {
    Account {
        id,
        platform_id: platform_id.to_owned(),
        account_identifier: None,
        api_key_preview: "sk-...abcd".to_owned(),
        is_verified,
        last_verified_at: None,
        created_at: "2025-01-01T00:00:00".to_owned(),
        quotas: vec![quota("messages", 10.0, 40.0)],
    }
}

fn display_name(platform_id: &str) -> String {
    match platform_id {
        "openai_free" => "ChatGPT Free",
        "gemini_free" => "Gemini Free",
        "claude_free" => "Claude Free",
        _ => "Other Platform",
    }
    .to_owned()
}

pub fn platform(platform_id: &str) -> PlatformSummary {
    PlatformSummary {
        platform_id: platform_id.to_owned(),
        platform_name: display_name(platform_id),
        description: "Free tier".to_owned(),
        icon: "*".to_owned(),
        signup_url: format!("https://{platform_id}.example.com/signup"),
    }
}

pub fn guide(platform_id: &str) -> Guide {
    Guide {
        platform_id: platform_id.to_owned(),
        platform_name: display_name(platform_id),
        description: "Free tier".to_owned(),
        icon: "*".to_owned(),
        signup_url: format!("https://{platform_id}.example.com/signup"),
        api_docs_url: format!("https://{platform_id}.example.com/docs"),
        quotas: Vec::new(),
        steps: vec![GuideStep {
            step: 1,
            title: "Visit the Platform".to_owned(),
            description: "Open the signup page".to_owned(),
            tips: vec!["Use a dedicated email".to_owned()],
        }],
        platform_tips: vec!["Daily limits reset at midnight UTC".to_owned()],
    }
}

pub fn platform_quota(platform_id: &str, urgency_score: f64) -> PlatformQuota {
    PlatformQuota {
        platform_id: platform_id.to_owned(),
        platform_name: display_name(platform_id),
        account_id: Some(1),
        quotas: vec![quota("messages", 30.0, 40.0), quota("images", 1.0, 10.0)],
        urgency_score,
        recommendation: "Use now".to_owned(),
        time_until_reset: Some("2h 5m".to_owned()),
    }
}

pub fn dashboard(platform_ids: &[&str]) -> Dashboard {
    let connected = u32::try_from(platform_ids.len()).unwrap_or(u32::MAX);
    Dashboard {
        total_platforms: 6,
        connected_accounts: connected,
        total_quota_usage_percentage: if platform_ids.is_empty() { 0.0 } else { 62.0 },
        platforms: platform_ids.iter().map(|id| platform_quota(id, 80.0)).collect(),
        last_updated: "2025-01-01T12:00:00".to_owned(),
    }
}

// =============================================================================
// MOCK BACKEND
// =============================================================================

/// In-memory backend that records every call by name.
///
/// Calls are recorded as `name` or `name:arg`. Names passed to [`fail`]
/// return a 500 instead of touching state.
///
/// [`fail`]: MockBackend::fail
pub struct MockBackend {
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    pub accounts: Mutex<Vec<Account>>,
    pub platforms: Vec<PlatformSummary>,
    pub dashboard: Mutex<Dashboard>,
    pub user: Mutex<User>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            accounts: Mutex::new(vec![account(1, "openai_free", true), account(2, "gemini_free", false)]),
            platforms: vec![platform("openai_free"), platform("gemini_free"), platform("claude_free")],
            dashboard: Mutex::new(dashboard(&["openai_free", "gemini_free"])),
            user: Mutex::new(user()),
        }
    }

    pub fn fail(&self, name: &'static str) {
        self.failing.lock().unwrap().insert(name);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls with this name, ignoring arguments.
    pub fn count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.split(':').next() == Some(name)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, name: &'static str, arg: Option<String>) -> Result<(), ApiError> {
        let entry = match arg {
            Some(arg) => format!("{name}:{arg}"),
            None => name.to_owned(),
        };
        self.calls.lock().unwrap().push(entry);
        if self.failing.lock().unwrap().contains(name) {
            return Err(ApiError::Status { status: 500, message: format!("{name} failed") });
        }
        Ok(())
    }
}

fn ok<T>(data: T) -> Result<ApiResponse<T>, ApiError> {
    Ok(ApiResponse { status: 200, data })
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn register(&self, email: &str, _password: &str) -> Result<ApiResponse<User>, ApiError> {
        self.record("register", Some(email.to_owned()))?;
        ok(User { email: email.to_owned(), ..user() })
    }

    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<TokenResponse>, ApiError> {
        self.record("login", Some(email.to_owned()))?;
        if password != "secret" {
            return Err(ApiError::Status { status: 401, message: "Incorrect email or password".to_owned() });
        }
        ok(TokenResponse {
            access_token: "tok-login".to_owned(),
            token_type: "bearer".to_owned(),
            user: User { email: email.to_owned(), ..user() },
        })
    }

    async fn me(&self) -> Result<ApiResponse<User>, ApiError> {
        self.record("me", None)?;
        ok(self.user.lock().unwrap().clone())
    }

    async fn update_me(&self, update: &UserUpdate) -> Result<ApiResponse<User>, ApiError> {
        self.record("update_me", None)?;
        let mut user = self.user.lock().unwrap();
        if let Some(chat_id) = &update.telegram_chat_id {
            user.telegram_chat_id = Some(chat_id.clone()).filter(|c| !c.is_empty());
        }
        if let Some(language) = &update.preferred_language {
            user.preferred_language.clone_from(language);
        }
        if let Some(timezone) = &update.timezone {
            user.timezone.clone_from(timezone);
        }
        ok(user.clone())
    }

    async fn list_accounts(&self) -> Result<ApiResponse<Vec<Account>>, ApiError> {
        self.record("list_accounts", None)?;
        ok(self.accounts.lock().unwrap().clone())
    }

    async fn get_account(&self, id: i64) -> Result<ApiResponse<Account>, ApiError> {
        self.record("get_account", Some(id.to_string()))?;
        let accounts = self.accounts.lock().unwrap();
        match accounts.iter().find(|a| a.id == id) {
            Some(account) => ok(account.clone()),
            None => Err(ApiError::Status { status: 404, message: "Account not found".to_owned() }),
        }
    }

    async fn create_account(&self, body: &AccountCreate) -> Result<ApiResponse<Account>, ApiError> {
        self.record("create_account", Some(body.platform_id.clone()))?;
        let mut accounts = self.accounts.lock().unwrap();
        let id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let created = Account { account_identifier: body.account_identifier.clone(), ..account(id, &body.platform_id, false) };
        accounts.push(created.clone());
        Ok(ApiResponse { status: 201, data: created })
    }

    async fn delete_account(&self, id: i64) -> Result<ApiResponse<()>, ApiError> {
        self.record("delete_account", Some(id.to_string()))?;
        self.accounts.lock().unwrap().retain(|a| a.id != id);
        Ok(ApiResponse { status: 204, data: () })
    }

    async fn verify_account(&self, id: i64) -> Result<ApiResponse<AccountVerifyResponse>, ApiError> {
        self.record("verify_account", Some(id.to_string()))?;
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.is_verified = true;
        }
        ok(AccountVerifyResponse {
            success: true,
            message: "Account verified successfully".to_owned(),
            details: None,
        })
    }

    async fn dashboard(&self) -> Result<ApiResponse<Dashboard>, ApiError> {
        self.record("dashboard", None)?;
        ok(self.dashboard.lock().unwrap().clone())
    }

    async fn recommendations(&self) -> Result<ApiResponse<Recommendations>, ApiError> {
        self.record("recommendations", None)?;
        ok(Recommendations {
            recommended_platform: Some(platform_quota("openai_free", 80.0)),
            reason: "Quota resets soon".to_owned(),
            alternatives: vec![platform_quota("gemini_free", 40.0)],
        })
    }

    async fn schedule(&self) -> Result<ApiResponse<Schedule>, ApiError> {
        self.record("schedule", None)?;
        ok(Schedule {
            schedule_type: "daily".to_owned(),
            schedule: vec![ScheduleItem {
                time_slot: "09:00".to_owned(),
                platform_id: "openai_free".to_owned(),
                platform_name: "ChatGPT Free".to_owned(),
                action: "Use".to_owned(),
                reason: "Window resets at noon".to_owned(),
            }],
            generated_at: "2025-01-01T08:00:00".to_owned(),
        })
    }

    async fn account_quota(&self, id: i64) -> Result<ApiResponse<AccountQuota>, ApiError> {
        self.record("account_quota", Some(id.to_string()))?;
        let accounts = self.accounts.lock().unwrap();
        ok(match accounts.iter().find(|a| a.id == id) {
            Some(account) => AccountQuota::Found {
                account_id: account.id,
                platform_id: account.platform_id.clone(),
                platform_name: display_name(&account.platform_id),
                quotas: account.quotas.clone(),
            },
            None => AccountQuota::Missing { error: "Account not found".to_owned() },
        })
    }

    async fn list_guides(&self) -> Result<ApiResponse<Vec<PlatformSummary>>, ApiError> {
        self.record("list_guides", None)?;
        ok(self.platforms.clone())
    }

    async fn get_guide(&self, platform_id: &str) -> Result<ApiResponse<GuideLookup>, ApiError> {
        self.record("get_guide", Some(platform_id.to_owned()))?;
        if self.platforms.iter().any(|p| p.platform_id == platform_id) {
            ok(GuideLookup::Found(Box::new(guide(platform_id))))
        } else {
            ok(GuideLookup::Missing { error: "Platform not found".to_owned() })
        }
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// Prompt with a fixed confirmation answer that records what it was shown.
pub struct RecordingPrompt {
    answer: bool,
    pub confirms: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, confirms: Mutex::new(Vec::new()), alerts: Mutex::new(Vec::new()) }
    }

    pub fn confirm_count(&self) -> usize {
        self.confirms.lock().unwrap().len()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_owned());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }
}
