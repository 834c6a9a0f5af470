//! Open Crow client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open Crow tracks free-tier quotas across AI platforms. The backend owns
//! every number: quota usage, urgency scores, recommendations, schedules and
//! account verification. This crate is the client side of that contract:
//!
//! - `util::token_store` keeps the session token and cached user.
//! - `net::http` sends every request, attaching the bearer token if present.
//! - `net::{auth, accounts, quota, guides}` map one function per endpoint.
//! - `pages` load, render and refresh per-screen state.
//! - `components` render view state as text.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::ClientConfig;
pub use error::ApiError;
pub use net::api::{ApiClient, Backend};
pub use util::token_store::TokenStore;
