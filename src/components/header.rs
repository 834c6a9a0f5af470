//! Header and footer framing every page.

use crate::net::types::User;

pub const PRODUCT_NAME: &str = "Open Crow";

/// Navigation entries as `(label, command)`.
pub const NAV: &[(&str, &str)] = &[
    ("Dashboard", "dashboard"),
    ("Accounts", "accounts list"),
    ("Guides", "guides list"),
    ("Settings", "settings show"),
];

#[must_use]
pub fn render_header(title: &str, user: Option<&User>) -> String {
    let who = user.map_or_else(|| "not logged in".to_owned(), |u| u.email.clone());
    format!("{PRODUCT_NAME} · {title}  ({who})\n{}\n", "=".repeat(title.chars().count() + PRODUCT_NAME.len() + 3))
}

#[must_use]
pub fn render_footer() -> String {
    let nav = NAV
        .iter()
        .map(|(label, command)| format!("{label}: opencrow {command}"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("\n{nav}\n")
}
