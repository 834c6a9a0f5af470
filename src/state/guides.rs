//! Guides page state.

use crate::net::types::{Guide, PlatformSummary};

#[derive(Clone, Debug)]
pub struct GuidesState {
    pub platforms: Vec<PlatformSummary>,
    pub selected: Option<Guide>,
    pub loading: bool,
}

impl Default for GuidesState {
    fn default() -> Self {
        Self { platforms: Vec::new(), selected: None, loading: true }
    }
}

impl GuidesState {
    #[must_use]
    pub fn is_selected(&self, platform_id: &str) -> bool {
        self.selected.as_ref().is_some_and(|g| g.platform_id == platform_id)
    }
}
