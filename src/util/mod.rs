//! Local helpers: session storage and user prompts.

pub mod prompt;
pub mod storage;
pub mod token_store;
