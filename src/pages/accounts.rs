//! Accounts page: connected platform accounts with add, verify and delete.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use crate::components::account_row::render_account_row;
use crate::net::api::Backend;
use crate::net::types::{Account, AccountVerifyResponse};
use crate::pages::Outcome;
use crate::state::accounts::{AccountForm, AccountsState};
use crate::util::prompt::Prompt;

pub const TITLE: &str = "Accounts";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this account?";
pub const CREATE_FAILED: &str = "Failed to add account";
pub const VERIFY_FAILED: &str = "Failed to verify account";
pub const DELETE_FAILED: &str = "Failed to delete account";
pub const EMPTY_MESSAGE: &str = "No accounts connected yet.";

pub struct AccountsPage<'a, B: Backend + ?Sized> {
    backend: &'a B,
    pub state: AccountsState,
}

impl<'a, B: Backend + ?Sized> AccountsPage<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend, state: AccountsState::default() }
    }

    /// Fetch accounts and the platform catalog together. Both must succeed
    /// for either to replace the current state.
    pub async fn load(&mut self) {
        let (accounts, platforms) = tokio::join!(self.backend.list_accounts(), self.backend.list_guides());
        match (accounts, platforms) {
            (Ok(accounts), Ok(platforms)) => {
                self.state.accounts = accounts.data;
                self.state.platforms = platforms.data;
            }
            (Err(error), _) | (_, Err(error)) => tracing::error!(%error, "failed to load accounts"),
        }
        self.state.loading = false;
    }

    /// Connect a new account from the add-account form.
    pub async fn create(&mut self, form: &AccountForm, prompt: &dyn Prompt) -> Outcome<Account> {
        match self.backend.create_account(&form.to_request()).await {
            Ok(response) => {
                self.load().await;
                Outcome::Applied(response.data)
            }
            Err(error) => {
                tracing::error!(%error, platform_id = %form.platform_id, "failed to add account");
                prompt.alert(CREATE_FAILED);
                Outcome::Failed(error.to_string())
            }
        }
    }

    pub async fn verify(&mut self, id: i64, prompt: &dyn Prompt) -> Outcome<AccountVerifyResponse> {
        match self.backend.verify_account(id).await {
            Ok(response) => {
                self.load().await;
                Outcome::Applied(response.data)
            }
            Err(error) => {
                tracing::error!(%error, id, "failed to verify account");
                prompt.alert(VERIFY_FAILED);
                Outcome::Failed(error.to_string())
            }
        }
    }

    /// Delete after one confirmation. Declining sends nothing.
    pub async fn delete(&mut self, id: i64, prompt: &dyn Prompt) -> Outcome {
        if !prompt.confirm(DELETE_CONFIRM) {
            return Outcome::Cancelled;
        }
        match self.backend.delete_account(id).await {
            Ok(_) => {
                self.load().await;
                Outcome::Applied(())
            }
            Err(error) => {
                tracing::error!(%error, id, "failed to delete account");
                prompt.alert(DELETE_FAILED);
                Outcome::Failed(error.to_string())
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        if self.state.loading {
            return "Loading...\n".to_owned();
        }
        if self.state.is_empty() {
            return format!("{EMPTY_MESSAGE} Add one with `opencrow accounts add`.\n");
        }
        let mut out = String::new();
        for account in &self.state.accounts {
            out.push_str(&render_account_row(account, self.state.platform_name(&account.platform_id)));
            out.push('\n');
        }
        out
    }
}
