//! Navigation collaborator and route templates

/// History-style navigation: `push` adds an entry, `replace` swaps the
/// current one (used after a slug change so the stale URL never lingers).
pub trait Navigator: Send + Sync {
    /// Navigate, keeping the current entry in history
    fn push(&self, route: &str);

    /// Navigate, replacing the current entry
    fn replace(&self, route: &str);
}

/// Canonical settings route for an organization, by id or slug.
#[must_use]
pub fn organization_settings_route(org: &str) -> String {
    format!("/settings/organization/{org}/settings/")
}

/// Teams overview route, one step back from the settings route. Target of
/// the access-gate redirect.
#[must_use]
pub fn teams_overview_route(org: &str) -> String {
    format!("/settings/organization/{org}/teams/")
}
