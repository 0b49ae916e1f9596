//! Orgset Fields - declarative settings form metadata
//!
//! The field registry that backs organization and project settings forms:
//! - Field descriptors with optional capability callbacks
//!   (`visible`, `disabled`, `choices`, `get_value`, `set_value`)
//! - Context-driven resolution into render-time field state
//! - Multiline value transforms and the auto-resolve age table
//!
//! # Example
//!
//! ```rust
//! use orgset_fields::{FieldContext, FieldRegistry, Organization};
//! use serde_json::json;
//!
//! let registry = FieldRegistry::project_general();
//! let org = Organization::new("1", "acme", "Acme")
//!     .with_setting("dataScrubber", json!(true));
//!
//! let ctx = FieldContext::new(&org, "dataScrubber");
//! let resolved = registry.resolve(&ctx, &json!(false)).unwrap();
//! assert!(resolved.disabled);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod context;
pub mod descriptor;
pub mod error;
pub mod multiline;
pub mod org;
pub mod registry;
pub mod resolve_age;

// Re-exports for convenience
pub use context::FieldContext;
pub use descriptor::{
    Choice, ChoicesFn, DisabledFn, FieldDescriptor, FieldKind, FormatLabelFn, GetValueFn,
    ResolvedField, SetValueFn, VisibleFn,
};
pub use error::FieldError;
pub use multiline::{extract_multiline_fields, join_multiline_fields};
pub use org::{is_truthy, Organization, Project, Team, ACCESS_ADMIN, ACCESS_WRITE};
pub use registry::{FieldRegistry, ORG_DISABLED_REASON, PROJECT_SETTINGS_ROUTE};
pub use resolve_age::{
    format_resolve_age, nearest_allowed_value, RESOLVE_AGE_ALLOWED_VALUES, RESOLVE_AGE_MAX_HOURS,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with settings fields
    pub use crate::{
        Choice, FieldContext, FieldDescriptor, FieldKind, FieldRegistry, Organization, Project,
        ResolvedField, Team,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
