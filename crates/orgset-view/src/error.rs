//! Error types for the settings view
//!
//! Taxonomy:
//! - fetch failures surface as an undifferentiated error state (the
//!   underlying cause is deliberately discarded)
//! - access denial is a redirect, not an error
//! - guarded removal attempts are silent no-ops, not errors

use crate::state::ViewState;

/// Errors from the injected API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The organization fetch failed or was rejected. The cause is not
    /// carried: the view reports a generic error state either way.
    #[error("organization fetch failed")]
    FetchFailed,
}

/// Errors from the lazy form-module load.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormLoadError {
    /// The form definition could not be produced
    #[error("form definition failed to load: {0}")]
    Unavailable(String),
}

/// Main settings-view error type.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// A state transition outside the allowed table was attempted
    #[error("illegal view state transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// State the view was in
        from: ViewState,
        /// State the transition aimed for
        to: ViewState,
    },

    /// Organization fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] ApiError),

    /// Form load failed
    #[error("form load failed: {0}")]
    FormLoad(#[from] FormLoadError),

    /// An operation requiring loaded data ran before the view was ready
    #[error("view is not ready")]
    NotReady,
}
