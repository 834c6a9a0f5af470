//! Page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page follows one contract: `load` issues its reads (independent
//! ones concurrently), stores the results and clears `loading` whether or
//! not they succeeded. Load failures are logged and otherwise swallowed, so
//! the page keeps showing its prior (possibly empty) data. Mutations call
//! through, then re-run `load` exactly once on success; on failure they
//! raise an alert and leave state alone. No optimistic updates.

pub mod accounts;
pub mod dashboard;
pub mod guides;
pub mod session;
pub mod settings;

/// Result of a user-triggered mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T = ()> {
    /// The backend accepted the change and the page reloaded.
    Applied(T),
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The request failed; the user was alerted.
    Failed(String),
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
