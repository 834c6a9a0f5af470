//! Settings page: Telegram link, language and timezone preferences.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::fmt::Write as _;

use crate::net::api::Backend;
use crate::net::types::User;
use crate::pages::Outcome;
use crate::state::settings::{SettingsForm, SettingsState, language_name, timezone_label};
use crate::util::prompt::Prompt;

pub const TITLE: &str = "Settings";
pub const SAVE_SUCCEEDED: &str = "Save successful!";
pub const SAVE_FAILED: &str = "Failed to update settings";

pub struct SettingsPage<'a, B: Backend + ?Sized> {
    backend: &'a B,
    pub state: SettingsState,
}

impl<'a, B: Backend + ?Sized> SettingsPage<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend, state: SettingsState::default() }
    }

    /// Fetch the current user and reseed the form from it.
    pub async fn load(&mut self) {
        match self.backend.me().await {
            Ok(response) => {
                self.state.form = SettingsForm::from_user(&response.data);
                self.state.user = Some(response.data);
            }
            Err(error) => tracing::error!(%error, "failed to load user"),
        }
        self.state.loading = false;
    }

    /// Submit the whole form.
    pub async fn save(&mut self, prompt: &dyn Prompt) -> Outcome<User> {
        match self.backend.update_me(&self.state.form.to_update()).await {
            Ok(response) => {
                prompt.alert(SAVE_SUCCEEDED);
                self.load().await;
                Outcome::Applied(response.data)
            }
            Err(error) => {
                tracing::error!(%error, "failed to update settings");
                prompt.alert(SAVE_FAILED);
                Outcome::Failed(error.to_string())
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        if self.state.loading {
            return "Loading...\n".to_owned();
        }
        let form = &self.state.form;
        let mut out = String::new();
        let telegram = if form.telegram_connected() {
            format!("{} (connected)", form.telegram_chat_id)
        } else {
            "not connected".to_owned()
        };
        let _ = writeln!(out, "Telegram:  {telegram}");
        let _ = writeln!(
            out,
            "Language:  {} ({})",
            form.preferred_language,
            language_name(&form.preferred_language).unwrap_or("unknown")
        );
        let _ = writeln!(
            out,
            "Timezone:  {} ({})",
            form.timezone,
            timezone_label(&form.timezone).unwrap_or("custom")
        );
        out
    }
}
