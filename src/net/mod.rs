//! Networking: the shared HTTP sender, one module per backend resource group,
//! and the wire schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` injects the bearer token, `auth`/`accounts`/`quota`/`guides` map
//! functions 1:1 to REST endpoints, and `api` ties them into `ApiClient`
//! behind the `Backend` trait.

pub mod accounts;
pub mod api;
pub mod auth;
pub mod guides;
pub mod http;
pub mod quota;
pub mod types;
