//! Testing utilities for the orgset workspace
//!
//! Shared fixtures, recording fakes for the view's injected collaborators,
//! and a harness that wires them into a `SettingsView`.

#![allow(missing_docs)]

use async_trait::async_trait;
use orgset_fields::{Organization, Project, Team};
use orgset_view::{
    ApiClient, ApiError, FormLoadError, FormLoader, Navigator, OrganizationActions,
    OrganizationSummary, OrganizationsStore, SettingsForm, SettingsView, ViewConfig,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A writable organization with teams, projects, and one org-level override.
#[must_use]
pub fn sample_organization() -> Organization {
    Organization::new("1", "acme", "Acme")
        .with_access(["org:write"])
        .with_teams(vec![
            Team::new("ops", "Operations").member(),
            Team::new("web", "Web"),
        ])
        .with_projects(vec![
            Project::new("backend", "Backend"),
            Project::new("frontend", "Frontend"),
        ])
}

/// An organization whose caller holds the admin capability.
#[must_use]
pub fn admin_organization() -> Organization {
    sample_organization().with_access(["org:admin"])
}

/// API client that always serves one organization.
#[derive(Debug, Clone)]
pub struct StaticApi {
    organization: Organization,
}

impl StaticApi {
    #[must_use]
    pub fn new(organization: Organization) -> Self {
        Self { organization }
    }
}

#[async_trait]
impl ApiClient for StaticApi {
    async fn fetch_organization(&self, _org_id: &str) -> Result<Organization, ApiError> {
        Ok(self.organization.clone())
    }
}

/// API client that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingApi;

#[async_trait]
impl ApiClient for FailingApi {
    async fn fetch_organization(&self, _org_id: &str) -> Result<Organization, ApiError> {
        Err(ApiError::FetchFailed)
    }
}

/// Form loader that serves a prebuilt definition.
#[derive(Debug, Clone)]
pub struct StaticFormLoader {
    form: SettingsForm,
}

impl StaticFormLoader {
    #[must_use]
    pub fn new(form: SettingsForm) -> Self {
        Self { form }
    }

    #[must_use]
    pub fn organization_general() -> Self {
        Self::new(SettingsForm::organization_general())
    }
}

#[async_trait]
impl FormLoader for StaticFormLoader {
    async fn load(&self) -> Result<SettingsForm, FormLoadError> {
        Ok(self.form.clone())
    }
}

/// Store serving a fixed organization list, counting subscriptions.
#[derive(Debug, Default)]
pub struct StaticStore {
    organizations: Vec<OrganizationSummary>,
    subscribes: AtomicUsize,
    unsubscribes: AtomicUsize,
}

impl StaticStore {
    #[must_use]
    pub fn new(organizations: Vec<OrganizationSummary>) -> Self {
        Self {
            organizations,
            subscribes: AtomicUsize::new(0),
            unsubscribes: AtomicUsize::new(0),
        }
    }

    /// Store holding `count` organizations.
    #[must_use]
    pub fn with_org_count(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| {
                    OrganizationSummary::new(i.to_string(), format!("org-{i}"), format!("Org {i}"))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn subscribe_count(&self) -> usize {
        self.subscribes.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.load(Ordering::SeqCst)
    }
}

impl OrganizationsStore for StaticStore {
    fn subscribe(&self) {
        self.subscribes.fetch_add(1, Ordering::SeqCst);
    }

    fn unsubscribe(&self) {
        self.unsubscribes.fetch_add(1, Ordering::SeqCst);
    }

    fn all(&self) -> Vec<OrganizationSummary> {
        self.organizations.clone()
    }
}

/// A dispatched organization action, as recorded by [`RecordingActions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEvent {
    Renamed {
        from: String,
        to: String,
    },
    Updated {
        slug: String,
    },
    Removed {
        org_id: String,
        success_message: String,
        error_message: String,
    },
}

/// Action dispatcher that records every event.
#[derive(Debug, Default)]
pub struct RecordingActions {
    events: Mutex<Vec<ActionEvent>>,
}

impl RecordingActions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<ActionEvent> {
        self.events.lock().expect("actions lock").clone()
    }
}

impl OrganizationActions for RecordingActions {
    fn rename(&self, prev: &Organization, next: &Organization) {
        self.events.lock().expect("actions lock").push(ActionEvent::Renamed {
            from: prev.slug.clone(),
            to: next.slug.clone(),
        });
    }

    fn update(&self, next: &Organization) {
        self.events
            .lock()
            .expect("actions lock")
            .push(ActionEvent::Updated {
                slug: next.slug.clone(),
            });
    }

    fn remove_and_redirect(&self, org_id: &str, success_message: &str, error_message: &str) {
        self.events
            .lock()
            .expect("actions lock")
            .push(ActionEvent::Removed {
                org_id: org_id.to_string(),
                success_message: success_message.to_string(),
                error_message: error_message.to_string(),
            });
    }
}

/// A navigation, as recorded by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Pushed(String),
    Replaced(String),
}

/// Navigator that records every route change.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &str) {
        self.events
            .lock()
            .expect("navigator lock")
            .push(NavEvent::Pushed(route.to_string()));
    }

    fn replace(&self, route: &str) {
        self.events
            .lock()
            .expect("navigator lock")
            .push(NavEvent::Replaced(route.to_string()));
    }
}

/// A settings view wired to recording fakes, keeping handles for
/// assertions.
pub struct ViewHarness {
    pub view: SettingsView,
    pub store: Arc<StaticStore>,
    pub actions: Arc<RecordingActions>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Build a harness serving `organization`, with `org_count` organizations
/// in the store.
#[must_use]
pub fn setup_settings_view(organization: Organization, org_count: usize) -> ViewHarness {
    setup_with_api(Arc::new(StaticApi::new(organization)), org_count)
}

/// Build a harness whose organization fetch always fails.
#[must_use]
pub fn setup_failing_view(org_count: usize) -> ViewHarness {
    setup_with_api(Arc::new(FailingApi), org_count)
}

fn setup_with_api(api: Arc<dyn ApiClient>, org_count: usize) -> ViewHarness {
    let store = Arc::new(StaticStore::with_org_count(org_count));
    let actions = Arc::new(RecordingActions::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let view = SettingsView::new(
        ViewConfig::new("acme"),
        api,
        Arc::new(StaticFormLoader::organization_general()),
        Arc::clone(&store) as Arc<dyn OrganizationsStore>,
        Arc::clone(&actions) as Arc<dyn OrganizationActions>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );

    ViewHarness {
        view,
        store,
        actions,
        navigator,
    }
}
