//! Per-page view state.
//!
//! DESIGN
//! ======
//! Each page owns plain state with a `loading` flag that starts `true` and is
//! cleared once the first load settles, successful or not. Nothing here is
//! shared between pages; the token store is the only cross-page state.

pub mod accounts;
pub mod dashboard;
pub mod guides;
pub mod settings;
