//! Settings form definition and its lazy loader
//!
//! The form module is loaded asynchronously alongside the organization
//! fetch; the view does not enter `Ready` until both have settled. A form
//! binds a field registry and knows how to resolve every field for a given
//! organization.

use crate::error::FormLoadError;
use async_trait::async_trait;
use orgset_fields::{FieldContext, FieldRegistry, Organization, ResolvedField};
use serde_json::Value;

/// A renderable settings form bound to a field registry.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    /// Form title
    pub title: String,
    registry: FieldRegistry,
}

impl SettingsForm {
    /// Create a form over a registry
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, registry: FieldRegistry) -> Self {
        Self {
            title: title.into(),
            registry,
        }
    }

    /// The organization general settings form
    #[must_use]
    pub fn organization_general() -> Self {
        Self::new("Organization Settings", FieldRegistry::organization_general())
    }

    /// The bound registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Resolve every field in display order against an organization.
    ///
    /// The current raw value for each field is looked up on the resource by
    /// field name; fields the resource does not carry resolve against null.
    #[must_use]
    pub fn resolve_fields(&self, organization: &Organization) -> Vec<ResolvedField> {
        self.registry
            .iter()
            .filter_map(|descriptor| {
                let ctx = FieldContext::new(organization, descriptor.name);
                let current = ctx.org_value().cloned().unwrap_or(Value::Null);
                self.registry.resolve(&ctx, &current).ok()
            })
            .collect()
    }
}

/// Asynchronous producer of the form definition.
///
/// An explicit load step whose value must exist before the view proceeds
/// to ready.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormLoader: Send + Sync {
    /// Produce the form definition.
    ///
    /// # Errors
    /// - `FormLoadError::Unavailable` when the definition cannot be built
    async fn load(&self) -> Result<SettingsForm, FormLoadError>;
}
