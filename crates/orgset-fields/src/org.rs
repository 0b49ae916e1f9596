//! Organization resource as delivered by the REST API
//!
//! The server returns camelCase JSON. Keys the typed model does not know
//! about (org-level policy overrides, feature-controlled settings) are kept
//! in a flattened map so field descriptors can look them up by name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Capability granting full administrative control over an organization.
pub const ACCESS_ADMIN: &str = "org:admin";

/// Capability granting write access to organization settings.
pub const ACCESS_WRITE: &str = "org:write";

/// A team within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// URL-safe team identifier
    pub slug: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether the requesting user belongs to this team
    #[serde(default)]
    pub is_member: bool,
}

impl Team {
    /// Create a new team
    #[inline]
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            is_member: false,
        }
    }

    /// Mark the requesting user as a member
    #[inline]
    #[must_use]
    pub fn member(mut self) -> Self {
        self.is_member = true;
        self
    }
}

/// A project within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// URL-safe project identifier
    pub slug: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl Project {
    /// Create a new project
    #[inline]
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Server-supplied organization resource
///
/// Owned by the settings view for the duration of one page visit and
/// replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Opaque organization identifier
    pub id: String,
    /// URL-safe organization identifier
    pub slug: String,
    /// Display name
    pub name: String,
    /// Access capabilities granted to the requesting user
    #[serde(default)]
    pub access: Vec<String>,
    /// Feature flags enabled for this organization
    #[serde(default)]
    pub features: Vec<String>,
    /// Teams in this organization
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Projects in this organization
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Whether this is the default organization (cannot be removed)
    #[serde(default)]
    pub is_default: bool,
    /// Remaining keys: org-level policy overrides and other settings,
    /// addressable by field name
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl Organization {
    /// Create a minimal organization
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
            access: Vec::new(),
            features: Vec::new(),
            teams: Vec::new(),
            projects: Vec::new(),
            is_default: false,
            settings: Map::new(),
        }
    }

    /// With access capabilities
    #[inline]
    #[must_use]
    pub fn with_access<I, S>(mut self, access: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.access = access.into_iter().map(Into::into).collect();
        self
    }

    /// With feature flags
    #[inline]
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// With teams
    #[inline]
    #[must_use]
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    /// With projects
    #[inline]
    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// With an org-level setting value
    #[inline]
    #[must_use]
    pub fn with_setting(mut self, name: impl Into<String>, value: Value) -> Self {
        self.settings.insert(name.into(), value);
        self
    }

    /// Mark as the default organization
    #[inline]
    #[must_use]
    pub fn default_org(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Membership check against the ordered feature-flag collection
    #[inline]
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Check a single access capability
    #[inline]
    #[must_use]
    pub fn has_access(&self, capability: &str) -> bool {
        self.access.iter().any(|a| a == capability)
    }

    /// Whether the requesting user holds the admin capability
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_access(ACCESS_ADMIN)
    }

    /// Whether the requesting user may modify organization settings
    /// (admin or write capability)
    #[inline]
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.has_access(ACCESS_ADMIN) || self.has_access(ACCESS_WRITE)
    }

    /// Look up an org-level setting by field name
    #[inline]
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    /// Whether a field has been set AND is truthy at the organization level
    #[inline]
    #[must_use]
    pub fn has_override(&self, name: &str) -> bool {
        self.setting(name).is_some_and(is_truthy)
    }
}

/// Truthiness of a raw JSON value.
///
/// `null`, `false`, `0`, `""`, and `[]` are falsy; everything else is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}
