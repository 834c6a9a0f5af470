//! Dashboard page: aggregated quota usage and per-platform cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::fmt::Write as _;

use crate::components::quota_card::render_quota_card;
use crate::net::api::Backend;
use crate::state::dashboard::{DashboardState, DashboardView};

pub const TITLE: &str = "Dashboard";
pub const NO_ACCOUNTS_MESSAGE: &str =
    "No accounts connected yet. Add one with `opencrow accounts add` to start tracking quotas.";

pub struct DashboardPage<'a, B: Backend + ?Sized> {
    backend: &'a B,
    pub state: DashboardState,
}

impl<'a, B: Backend + ?Sized> DashboardPage<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend, state: DashboardState::default() }
    }

    /// Fetch the dashboard snapshot, replacing any previous one.
    pub async fn load(&mut self) {
        match self.backend.dashboard().await {
            Ok(response) => self.state.dashboard = Some(response.data),
            Err(error) => tracing::error!(%error, "failed to load dashboard"),
        }
        self.state.loading = false;
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self.state.view() {
            DashboardView::Loading => "Loading...\n".to_owned(),
            DashboardView::NoAccounts => format!("{NO_ACCOUNTS_MESSAGE}\n"),
            DashboardView::Ready(dashboard) => {
                let mut out = String::new();
                let _ = writeln!(out, "Total platforms:     {}", dashboard.total_platforms);
                let _ = writeln!(out, "Connected accounts:  {}", dashboard.connected_accounts);
                let _ = writeln!(out, "Overall usage:       {:.1}%", dashboard.total_quota_usage_percentage);
                out.push_str("\nYour Platforms\n\n");
                for platform in &dashboard.platforms {
                    out.push_str(&render_quota_card(platform));
                    out.push('\n');
                }
                let _ = writeln!(out, "Last updated {}", dashboard.last_updated);
                out
            }
        }
    }
}
