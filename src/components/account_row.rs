//! One row of the accounts list.

use crate::net::types::Account;

#[must_use]
pub fn verified_label(account: &Account) -> &'static str {
    if account.is_verified { "verified" } else { "not verified" }
}

/// `#id platform (identifier)  key  badge`, with a verify hint for
/// unverified accounts.
#[must_use]
pub fn render_account_row(account: &Account, platform_name: Option<&str>) -> String {
    let name = platform_name.unwrap_or(&account.platform_id);
    let mut row = format!("#{:<4} {name}", account.id);
    if let Some(identifier) = account.account_identifier.as_deref().filter(|s| !s.is_empty()) {
        row.push_str(&format!(" ({identifier})"));
    }
    row.push_str(&format!("  API key: {}  [{}]", account.api_key_preview, verified_label(account)));
    if !account.is_verified {
        row.push_str(&format!("  -> opencrow accounts verify {}", account.id));
    }
    row
}
