//! Field registry and the built-in settings tables
//!
//! Provides [`FieldRegistry`], an insertion-ordered map from field name to
//! [`FieldDescriptor`], plus the project-general and organization-general
//! field tables. Resolution turns a descriptor and a context into the
//! effective render-time state of one field.

use crate::context::FieldContext;
use crate::descriptor::{Choice, FieldDescriptor, FieldKind, ResolvedField};
use crate::error::FieldError;
use crate::multiline::extract_multiline_fields;
use crate::org::is_truthy;
use crate::resolve_age::{format_resolve_age, RESOLVE_AGE_ALLOWED_VALUES};
use indexmap::IndexMap;
use serde_json::Value;

/// Route under which the project general settings form is reachable, kept
/// so form labels and help text stay searchable by location.
pub const PROJECT_SETTINGS_ROUTE: &str =
    "/settings/organization/:org_id/project/:project_id/settings/";

/// Reason displayed for fields locked by an org-level policy override.
pub const ORG_DISABLED_REASON: &str = "This option is enforced by your organization's \
     settings and cannot be customized per-project.";

/// Feature flag that replaces the legacy single-team selector.
const NEW_TEAMS_FEATURE: &str = "new-teams";

/// Insertion-ordered table of field descriptors.
///
/// Immutable after module load in practice: built once, then only read.
/// Insertion order defines default display order.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: IndexMap<&'static str, FieldDescriptor>,
}

impl FieldRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Register a descriptor under its own name
    pub fn insert(&mut self, descriptor: FieldDescriptor) {
        self.fields.insert(descriptor.name, descriptor);
    }

    /// Look up a descriptor by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Check whether a field is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of registered fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in display order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.keys().copied().collect()
    }

    /// Iterate descriptors in display order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Resolve the effective render-time state of the field named by the
    /// context, given the current raw value.
    ///
    /// # Errors
    /// - `FieldError::UnknownField` when no descriptor is registered under
    ///   the context's field name
    pub fn resolve(
        &self,
        ctx: &FieldContext<'_>,
        current: &Value,
    ) -> Result<ResolvedField, FieldError> {
        let descriptor = self
            .get(ctx.name)
            .ok_or_else(|| FieldError::UnknownField(ctx.name.to_string()))?;

        Ok(ResolvedField {
            name: descriptor.name,
            visible: descriptor.is_visible(ctx),
            disabled: descriptor.is_disabled(ctx),
            disabled_reason: if descriptor.is_disabled(ctx) {
                descriptor.disabled_reason.clone()
            } else {
                None
            },
            choices: descriptor.resolve_choices(ctx),
            formatted_value: descriptor.formatted_value(current),
        })
    }

    /// The project general settings table.
    #[must_use]
    pub fn project_general() -> Self {
        let mut registry = Self::new();

        registry.insert(
            FieldDescriptor::new("name", FieldKind::String)
                .required()
                .label("Legacy Name")
                .placeholder("My Service Name")
                .help("DEPRECATED - In the future, only Name will be used to identify your project"),
        );
        registry.insert(
            FieldDescriptor::new("slug", FieldKind::String)
                .required()
                .label("Name")
                .placeholder("my-service-name")
                .help("A unique ID used to identify this project"),
        );
        registry.insert(
            FieldDescriptor::new("team", FieldKind::Array)
                .label("Team")
                .visible(team_visible)
                .choices(member_team_choices)
                .help("Update the team that owns this project"),
        );
        registry.insert(
            FieldDescriptor::new("subjectTemplate", FieldKind::String)
                .label("Subject Prefix")
                .help("Choose a custom prefix for emails from this project"),
        );
        registry.insert(
            FieldDescriptor::new("defaultEnvironment", FieldKind::String)
                .label("Default Environment")
                .placeholder("production")
                .help("The default selected environment when viewing issues"),
        );
        registry.insert(
            FieldDescriptor::new("resolveAge", FieldKind::Range)
                .allowed_values(RESOLVE_AGE_ALLOWED_VALUES.clone())
                .label("Auto Resolve")
                .help("Automatically resolve an issue if it hasn't been seen for this amount of time")
                .format_label(format_resolve_age),
        );
        registry.insert(
            FieldDescriptor::new("dataScrubber", FieldKind::Boolean)
                .label("Data Scrubber")
                .disabled(org_override_disabled, ORG_DISABLED_REASON)
                .help("Enable server-side data scrubbing")
                .set_value(org_override_set_value),
        );
        registry.insert(
            FieldDescriptor::new("dataScrubberDefaults", FieldKind::Boolean)
                .label("Use Default Scrubbers")
                .disabled(org_override_disabled, ORG_DISABLED_REASON)
                .help("Apply default scrubbers to prevent things like passwords and credit cards from being stored")
                .set_value(org_override_set_value),
        );
        registry.insert(
            FieldDescriptor::new("scrubIPAddresses", FieldKind::Boolean)
                .label("Prevent Storing of IP Addresses")
                .disabled(org_override_disabled, ORG_DISABLED_REASON)
                .help("Preventing IP addresses from being stored for new events")
                .set_value(org_override_set_value),
        );
        registry.insert(
            FieldDescriptor::new("sensitiveFields", FieldKind::String)
                .multiline()
                .placeholder("email")
                .label("Additional Sensitive Fields")
                .help("Additional field names to match against when scrubbing data. Separate multiple entries with a newline")
                .get_value(multiline_get_value)
                .set_value(multiline_set_value),
        );
        registry.insert(
            FieldDescriptor::new("safeFields", FieldKind::String)
                .multiline()
                .placeholder("business-email")
                .label("Safe Fields")
                .help("Field names which data scrubbers should ignore. Separate multiple entries with a newline")
                .get_value(multiline_get_value)
                .set_value(multiline_set_value),
        );
        registry.insert(
            FieldDescriptor::new("allowedDomains", FieldKind::String)
                .multiline()
                .placeholder("https://example.com or example.com")
                .label("Allowed Domains")
                .help("Separate multiple entries with a newline")
                .get_value(multiline_get_value)
                .set_value(multiline_set_value),
        );
        registry.insert(
            FieldDescriptor::new("scrapeJavaScript", FieldKind::Boolean)
                .label("Enable JavaScript source fetching")
                .help("Allow the server to scrape missing JavaScript source context when possible"),
        );
        registry.insert(
            FieldDescriptor::new("securityToken", FieldKind::String)
                .label("Security Token")
                .help("Outbound requests matching Allowed Domains will have the header \"{token_header}: {token}\" appended"),
        );
        registry.insert(
            FieldDescriptor::new("securityTokenHeader", FieldKind::String)
                .placeholder("X-Security-Token")
                .label("Security Token Header")
                .help("Outbound requests matching Allowed Domains will have the header \"{token_header}: {token}\" appended."),
        );
        registry.insert(
            FieldDescriptor::new("verifySSL", FieldKind::Boolean)
                .label("Verify TLS/SSL")
                .help("Outbound requests will verify TLS (sometimes known as SSL) connections."),
        );

        registry
    }

    /// The organization general settings table, bound by the settings view.
    #[must_use]
    pub fn organization_general() -> Self {
        let mut registry = Self::new();

        registry.insert(
            FieldDescriptor::new("name", FieldKind::String)
                .required()
                .label("Name")
                .placeholder("e.g. My Company")
                .help("The name of your organization"),
        );
        registry.insert(
            FieldDescriptor::new("slug", FieldKind::String)
                .required()
                .label("Short Name")
                .placeholder("e.g. my-company")
                .help("A unique ID used to identify this organization"),
        );

        registry
    }
}

/// The legacy team selector only shows when the org has not moved to the
/// new-teams flow and there is actually a choice to make.
fn team_visible(ctx: &FieldContext<'_>) -> bool {
    let org = ctx.organization;
    !org.has_feature(NEW_TEAMS_FEATURE) && org.teams.len() > 1
}

/// Teams the requesting user belongs to, as (slug, slug) choices.
fn member_team_choices(ctx: &FieldContext<'_>) -> Vec<Choice> {
    ctx.organization
        .teams
        .iter()
        .filter(|team| team.is_member)
        .map(|team| Choice::new(&team.slug, &team.slug))
        .collect()
}

/// A field is locked when the same-named attribute is truthy on the
/// organization resource.
fn org_override_disabled(ctx: &FieldContext<'_>) -> bool {
    ctx.organization.has_override(ctx.name)
}

/// Organization override wins unconditionally over the edited value, even
/// when the user attempted to clear the field.
fn org_override_set_value(edited: Value, ctx: &FieldContext<'_>) -> Value {
    match ctx.org_value() {
        Some(org_value) if is_truthy(org_value) => org_value.clone(),
        _ => edited,
    }
}

/// Parse a newline-joined block into the canonical ordered line list.
fn multiline_get_value(raw: &Value) -> Value {
    let text = raw.as_str().unwrap_or_default();
    Value::Array(
        extract_multiline_fields(text)
            .into_iter()
            .map(Value::String)
            .collect(),
    )
}

/// Join the canonical line list back to a newline-joined block; anything
/// that is not an array serializes to an empty string.
fn multiline_set_value(edited: Value, _ctx: &FieldContext<'_>) -> Value {
    match edited {
        Value::Array(items) => {
            let lines: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            Value::String(lines.join("\n"))
        }
        _ => Value::String(String::new()),
    }
}
