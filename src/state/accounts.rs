//! Accounts page state: connected accounts plus the platform catalog used
//! by the add-account form.

use crate::net::types::{Account, AccountCreate, PlatformSummary};

#[derive(Clone, Debug)]
pub struct AccountsState {
    pub accounts: Vec<Account>,
    pub platforms: Vec<PlatformSummary>,
    pub loading: bool,
}

impl Default for AccountsState {
    fn default() -> Self {
        Self { accounts: Vec::new(), platforms: Vec::new(), loading: true }
    }
}

impl AccountsState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    #[must_use]
    pub fn platform_name(&self, platform_id: &str) -> Option<&str> {
        self.platforms
            .iter()
            .find(|p| p.platform_id == platform_id)
            .map(|p| p.platform_name.as_str())
    }
}

/// Add-account form. An empty identifier is sent as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub platform_id: String,
    pub api_key: String,
    pub account_identifier: String,
}

impl AccountForm {
    #[must_use]
    pub fn to_request(&self) -> AccountCreate {
        let identifier = self.account_identifier.trim();
        AccountCreate {
            platform_id: self.platform_id.clone(),
            api_key: self.api_key.clone(),
            account_identifier: (!identifier.is_empty()).then(|| identifier.to_owned()),
        }
    }
}
