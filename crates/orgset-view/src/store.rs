//! Injected organizations store
//!
//! The external store holding all of the caller's organizations. The view
//! subscribes on mount, unsubscribes on unmount, and queries the full list
//! when gating removal and the remove panel.

/// Summary of one organization as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSummary {
    /// Opaque organization identifier
    pub id: String,
    /// URL-safe organization identifier
    pub slug: String,
    /// Display name
    pub name: String,
}

impl OrganizationSummary {
    /// Create a new summary
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Store of the caller's organizations.
#[cfg_attr(test, mockall::automock)]
pub trait OrganizationsStore: Send + Sync {
    /// Register interest in store updates
    fn subscribe(&self);

    /// Drop interest in store updates
    fn unsubscribe(&self);

    /// All organizations the caller belongs to
    fn all(&self) -> Vec<OrganizationSummary>;
}
