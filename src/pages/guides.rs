//! Guides page: platform catalog and per-platform signup guides.

#[cfg(test)]
#[path = "guides_test.rs"]
mod guides_test;

use crate::components::guide_view::{render_catalog, render_guide};
use crate::net::api::Backend;
use crate::net::types::GuideLookup;
use crate::state::guides::GuidesState;

pub const TITLE: &str = "Setup Guides";
pub const SELECT_HINT: &str = "Select a platform with `opencrow guides show <platform_id>`.";

pub struct GuidesPage<'a, B: Backend + ?Sized> {
    backend: &'a B,
    pub state: GuidesState,
}

impl<'a, B: Backend + ?Sized> GuidesPage<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend, state: GuidesState::default() }
    }

    pub async fn load(&mut self) {
        match self.backend.list_guides().await {
            Ok(response) => self.state.platforms = response.data,
            Err(error) => tracing::error!(%error, "failed to load platforms"),
        }
        self.state.loading = false;
    }

    /// Load one guide into `selected`. Failures keep the prior selection.
    pub async fn select(&mut self, platform_id: &str) {
        match self.backend.get_guide(platform_id).await {
            Ok(response) => match response.data {
                GuideLookup::Found(guide) => self.state.selected = Some(*guide),
                GuideLookup::Missing { error } => tracing::warn!(platform_id, %error, "guide not found"),
            },
            Err(error) => tracing::error!(%error, platform_id, "failed to load guide"),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        if self.state.loading {
            return "Loading...\n".to_owned();
        }
        let selected = self.state.selected.as_ref();
        let mut out = render_catalog(&self.state.platforms, selected.map(|g| g.platform_id.as_str()));
        out.push('\n');
        match selected {
            Some(guide) => out.push_str(&render_guide(guide)),
            None => {
                out.push_str(SELECT_HINT);
                out.push('\n');
            }
        }
        out
    }
}
