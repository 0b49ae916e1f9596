//! Settings view lifecycle states
//!
//! `Loading` resolves to exactly one of `Error`, `Ready`, or `Redirecting`
//! once the joined fetch and form load settle. `Ready` persists across
//! in-place saves and may only leave for `Redirecting`. `Error` and
//! `Redirecting` are terminal for one page visit.

use crate::error::ViewError;

/// Lifecycle state of the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Fetch and form load in flight
    Loading,
    /// Fetch or form load failed; renders a generic error indicator
    Error,
    /// Data and form available; renders the settings form
    Ready,
    /// Caller lacks write access; navigation dispatched, nothing renders
    Redirecting,
}

/// States reachable from `from` in one transition.
#[must_use]
pub fn allowed_transitions(from: ViewState) -> Vec<ViewState> {
    use ViewState::{Error, Loading, Ready, Redirecting};
    match from {
        Loading => vec![Error, Ready, Redirecting],
        Ready => vec![Redirecting],
        Error | Redirecting => vec![],
    }
}

/// Validates a state transition against the allowed table.
pub fn validate_transition(from: ViewState, to: ViewState) -> Result<(), ViewError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(ViewError::IllegalTransition { from, to })
    }
}
