//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "OPENCROW_API_URL";
pub const HOME_ENV: &str = "OPENCROW_HOME";
pub const SESSION_FILE: &str = "session.json";

const HOME_DIR_NAME: &str = ".opencrow";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    /// Directory holding the session file.
    pub home: PathBuf,
}

impl ClientConfig {
    /// Build config from explicit values, normalizing the base URL.
    pub fn new(base_url: &str, home: impl Into<PathBuf>) -> Self {
        Self { base_url: normalize_base_url(base_url), home: home.into() }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `OPENCROW_API_URL`: backend origin, default `http://localhost:8000`
    /// - `OPENCROW_HOME`: session directory, default `~/.opencrow`
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = non_empty_env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let home = non_empty_env(HOME_ENV).map_or_else(default_home, PathBuf::from);
        Self::new(&base_url, home)
    }

    /// Path of the JSON file backing the token store.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.home.join(SESSION_FILE)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn default_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(HOME_DIR_NAME)
}

pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
