//! Orgset View - organization settings orchestration
//!
//! The settings page as a plain component over injected collaborators:
//! - Fetches the organization resource and lazily loads the form
//!   definition, joined all-or-nothing before entering ready
//! - Gates on admin/write access, redirecting to the teams overview
//! - Reconciles saves (slug rename vs in-place update) and guarded removal
//! - Renders exactly one display branch as a pure function of state
//!
//! # Example
//!
//! ```rust,ignore
//! use orgset_view::{SettingsView, ViewConfig};
//!
//! # async fn example(view: &mut SettingsView) {
//! view.mount().await.unwrap();
//! let output = view.render();
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod actions;
pub mod api;
pub mod error;
pub mod form;
pub mod navigation;
pub mod state;
pub mod store;
pub mod view;

// Re-exports for convenience
pub use actions::OrganizationActions;
pub use api::ApiClient;
pub use error::{ApiError, FormLoadError, ViewError};
pub use form::{FormLoader, SettingsForm};
pub use navigation::{organization_settings_route, teams_overview_route, Navigator};
pub use state::{allowed_transitions, validate_transition, ViewState};
pub use store::{OrganizationSummary, OrganizationsStore};
pub use view::{
    FormRender, RemoveOutcome, RemovePanel, RenderOutput, SaveOutcome, SettingsView, ViewConfig,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the settings view
    pub use crate::{
        ApiClient, FormLoader, Navigator, OrganizationActions, OrganizationsStore, RenderOutput,
        SettingsForm, SettingsView, ViewConfig, ViewState,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
