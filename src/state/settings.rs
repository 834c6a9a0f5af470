//! Settings page state and the preference choices it offers.

use crate::net::types::{User, UserUpdate};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Interface languages as `(code, native name)`.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ko", "한국어"),
    ("ja", "日本語"),
    ("zh", "中文"),
    ("hi", "हिन्दी"),
    ("fr", "Français"),
    ("es", "Español"),
    ("ms", "Bahasa Melayu"),
    ("vi", "Tiếng Việt"),
];

/// Reminder timezones as `(IANA name, label)`.
pub const TIMEZONES: &[(&str, &str)] = &[
    ("UTC", "UTC"),
    ("America/New_York", "Eastern Time (US)"),
    ("America/Chicago", "Central Time (US)"),
    ("America/Los_Angeles", "Pacific Time (US)"),
    ("Europe/London", "London"),
    ("Europe/Paris", "Paris"),
    ("Asia/Tokyo", "Tokyo"),
    ("Asia/Seoul", "Seoul"),
    ("Asia/Shanghai", "Shanghai"),
    ("Asia/Kolkata", "India"),
];

#[must_use]
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

#[must_use]
pub fn timezone_label(zone: &str) -> Option<&'static str> {
    TIMEZONES.iter().find(|(z, _)| *z == zone).map(|(_, label)| *label)
}

/// Editable copy of the user's preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub telegram_chat_id: String,
    pub preferred_language: String,
    pub timezone: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            telegram_chat_id: String::new(),
            preferred_language: DEFAULT_LANGUAGE.to_owned(),
            timezone: DEFAULT_TIMEZONE.to_owned(),
        }
    }
}

impl SettingsForm {
    /// Seed the form from a fetched user; blank fields fall back to defaults.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        let or_default = |value: &str, default: &str| {
            if value.trim().is_empty() { default.to_owned() } else { value.to_owned() }
        };
        Self {
            telegram_chat_id: user.telegram_chat_id.clone().unwrap_or_default(),
            preferred_language: or_default(&user.preferred_language, DEFAULT_LANGUAGE),
            timezone: or_default(&user.timezone, DEFAULT_TIMEZONE),
        }
    }

    /// The form is always sent whole, matching what the settings screen submits.
    #[must_use]
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            telegram_chat_id: Some(self.telegram_chat_id.clone()),
            preferred_language: Some(self.preferred_language.clone()),
            timezone: Some(self.timezone.clone()),
        }
    }

    #[must_use]
    pub fn telegram_connected(&self) -> bool {
        !self.telegram_chat_id.trim().is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct SettingsState {
    pub user: Option<User>,
    pub form: SettingsForm,
    pub loading: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self { user: None, form: SettingsForm::default(), loading: true }
    }
}
