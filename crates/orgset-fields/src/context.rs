//! Render-time context handed to field callbacks
//!
//! A read-only view of the organization (and optionally a project) plus the
//! name of the field being resolved. The registry never mutates it.

use crate::org::{Organization, Project};
use serde_json::Value;

/// Context supplied to `visible`/`disabled`/`choices`/`set_value` callbacks.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// The organization resource currently loaded by the view
    pub organization: &'a Organization,
    /// The project being configured, when resolving project-level fields
    pub project: Option<&'a Project>,
    /// Name of the field under resolution
    pub name: &'a str,
}

impl<'a> FieldContext<'a> {
    /// Create a context for one field
    #[inline]
    #[must_use]
    pub fn new(organization: &'a Organization, name: &'a str) -> Self {
        Self {
            organization,
            project: None,
            name,
        }
    }

    /// With a project
    #[inline]
    #[must_use]
    pub fn with_project(mut self, project: &'a Project) -> Self {
        self.project = Some(project);
        self
    }

    /// The org-level value stored under this field's name, if any
    #[inline]
    #[must_use]
    pub fn org_value(&self) -> Option<&'a Value> {
        self.organization.setting(self.name)
    }
}
