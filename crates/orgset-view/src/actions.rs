//! Outbound organization actions
//!
//! Opaque collaborators that perform the actual network writes and store
//! updates. The view only dispatches; side effects are not its concern.

use orgset_fields::Organization;

/// Dispatcher for organization mutations.
pub trait OrganizationActions: Send + Sync {
    /// Rename an organization (slug change)
    fn rename(&self, prev: &Organization, next: &Organization);

    /// Apply an in-place update
    fn update(&self, next: &Organization);

    /// Remove an organization and redirect the caller to a remaining one,
    /// reporting with the given human-readable messages
    fn remove_and_redirect(&self, org_id: &str, success_message: &str, error_message: &str);
}
