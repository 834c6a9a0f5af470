//! Presentational components: text rendering of view state, no network access.

pub mod account_row;
pub mod guide_view;
pub mod header;
pub mod quota_card;
pub mod quota_plan;
