//! Dashboard page state.

use crate::net::types::Dashboard;

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub dashboard: Option<Dashboard>,
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { dashboard: None, loading: true }
    }
}

/// What the dashboard should show for the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    /// No snapshot, or the user has no connected accounts.
    NoAccounts,
    Ready(&'a Dashboard),
}

impl DashboardState {
    #[must_use]
    pub fn view(&self) -> DashboardView<'_> {
        if self.loading {
            return DashboardView::Loading;
        }
        match &self.dashboard {
            Some(dashboard) if !dashboard.has_no_accounts() => DashboardView::Ready(dashboard),
            _ => DashboardView::NoAccounts,
        }
    }
}
