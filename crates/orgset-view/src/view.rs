//! Organization settings view orchestration
//!
//! A plain component holding local state, with explicit dependency
//! injection of its collaborators:
//! - mount joins the organization fetch and the form load, then gates on
//!   write access
//! - save distinguishes slug changes (rename + location replace) from
//!   in-place updates
//! - removal is guarded: no data or a sole organization is a silent no-op
//! - render is a pure function of state producing exactly one display
//!   branch

use crate::actions::OrganizationActions;
use crate::api::ApiClient;
use crate::error::ViewError;
use crate::form::{FormLoader, SettingsForm};
use crate::navigation::{organization_settings_route, teams_overview_route, Navigator};
use crate::state::{validate_transition, ViewState};
use crate::store::OrganizationsStore;
use orgset_fields::{Organization, ResolvedField};
use std::sync::Arc;

/// Settings view configuration.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Organization the view is mounted for (id or slug route param)
    pub org_id: String,
}

impl ViewConfig {
    /// Create a configuration for one organization
    #[inline]
    #[must_use]
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
        }
    }
}

/// Outcome of a save, for callers that care which path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Slug changed: rename dispatched and location replaced
    Renamed,
    /// In-place update dispatched, local state refreshed
    Updated,
}

/// Outcome of a removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Remove-and-redirect dispatched
    Dispatched,
    /// Guard fired: no data, or the caller's only organization
    Ignored,
}

/// The danger panel offered to admins of removable organizations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovePanel {
    /// Panel title embedding the organization name
    pub title: String,
    /// Confirmation copy shown before dispatch
    pub confirmation: String,
    /// Projects that would be deleted along with the organization
    pub project_slugs: Vec<String>,
}

/// The rendered settings form branch.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRender {
    /// Page header
    pub title: String,
    /// Every field resolved against the loaded organization, display order
    pub fields: Vec<ResolvedField>,
    /// Removal panel, when the caller may remove this organization
    pub remove_panel: Option<RemovePanel>,
}

/// Exactly one display branch; never combined.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutput {
    /// Loading indicator
    Loading,
    /// Generic error indicator
    Error,
    /// Redirect dispatched; nothing renders
    Nothing,
    /// The composed settings form
    Form(FormRender),
}

/// Organization settings view.
pub struct SettingsView {
    config: ViewConfig,
    api: Arc<dyn ApiClient>,
    forms: Arc<dyn FormLoader>,
    store: Arc<dyn OrganizationsStore>,
    actions: Arc<dyn OrganizationActions>,
    navigator: Arc<dyn Navigator>,
    state: ViewState,
    data: Option<Organization>,
    form: Option<SettingsForm>,
    subscribed: bool,
}

impl SettingsView {
    /// Create an unmounted view in the loading state
    #[must_use]
    pub fn new(
        config: ViewConfig,
        api: Arc<dyn ApiClient>,
        forms: Arc<dyn FormLoader>,
        store: Arc<dyn OrganizationsStore>,
        actions: Arc<dyn OrganizationActions>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            api,
            forms,
            store,
            actions,
            navigator,
            state: ViewState::Loading,
            data: None,
            form: None,
            subscribed: false,
        }
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The loaded organization, once ready
    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&Organization> {
        self.data.as_ref()
    }

    /// Mount the view: subscribe to the store, join the organization fetch
    /// with the form load, then gate on write access.
    ///
    /// Both async operations must settle before leaving `Loading`; a single
    /// failure discards the other's result and the view reports a generic
    /// error state. A caller without admin or write capability is redirected
    /// to the teams overview and nothing renders.
    ///
    /// # Errors
    /// - `ViewError::IllegalTransition` when mounted from a non-loading
    ///   state (e.g. mounted twice)
    pub async fn mount(&mut self) -> Result<ViewState, ViewError> {
        self.store.subscribe();
        self.subscribed = true;

        let api = Arc::clone(&self.api);
        let forms = Arc::clone(&self.forms);
        let org_id = self.config.org_id.clone();
        let (fetched, loaded) = tokio::join!(api.fetch_organization(&org_id), forms.load());

        match (fetched, loaded) {
            (Ok(data), Ok(form)) => {
                if !data.can_write() {
                    tracing::info!(org = %self.config.org_id, "access gate: redirecting to teams overview");
                    self.navigator.push(&teams_overview_route(&self.config.org_id));
                    self.transition(ViewState::Redirecting)?;
                    return Ok(self.state);
                }

                tracing::debug!(org = %data.slug, "organization settings loaded");
                self.data = Some(data);
                self.form = Some(form);
                self.transition(ViewState::Ready)?;
            }
            // The rejection cause is discarded; the view reports an
            // undifferentiated error state.
            (Err(_), _) | (_, Err(_)) => {
                tracing::warn!(org = %self.config.org_id, "organization settings failed to load");
                self.transition(ViewState::Error)?;
            }
        }

        Ok(self.state)
    }

    /// Unmount the view, releasing the store subscription. A fetch that
    /// settles after this point is simply never observed.
    pub fn unmount(&mut self) {
        if self.subscribed {
            self.store.unsubscribe();
            self.subscribed = false;
        }
    }

    /// Reconcile a save emitted by the form.
    ///
    /// A slug change dispatches a rename and replaces the location with the
    /// new canonical settings URL; the stale page is never re-rendered. Any
    /// other change refreshes local state and dispatches a generic update.
    ///
    /// # Errors
    /// - `ViewError::NotReady` when the view has no loaded data
    pub fn handle_save(
        &mut self,
        prev: &Organization,
        next: Organization,
    ) -> Result<SaveOutcome, ViewError> {
        if self.state != ViewState::Ready {
            return Err(ViewError::NotReady);
        }

        if !next.slug.is_empty() && next.slug != prev.slug {
            tracing::info!(from = %prev.slug, to = %next.slug, "organization slug changed");
            self.actions.rename(prev, &next);
            self.navigator
                .replace(&organization_settings_route(&next.slug));
            return Ok(SaveOutcome::Renamed);
        }

        tracing::debug!(org = %next.slug, "organization updated in place");
        self.actions.update(&next);
        self.data = Some(next);
        Ok(SaveOutcome::Updated)
    }

    /// Attempt to remove the loaded organization.
    ///
    /// Guarded: a no-op without loaded data, and a no-op when the caller
    /// belongs to fewer than two organizations (the only organization
    /// cannot be deleted).
    pub fn handle_remove(&self) -> RemoveOutcome {
        let Some(data) = self.data.as_ref() else {
            return RemoveOutcome::Ignored;
        };

        if self.store.all().len() < 2 {
            tracing::debug!(org = %data.slug, "removal ignored: sole organization");
            return RemoveOutcome::Ignored;
        }

        self.actions.remove_and_redirect(
            &self.config.org_id,
            &format!("{} is queued for deletion.", data.name),
            &format!("Error removing the {} organization", data.name),
        );
        RemoveOutcome::Dispatched
    }

    /// Render the view: a pure function of `{state, data, form}` yielding
    /// exactly one display branch.
    #[must_use]
    pub fn render(&self) -> RenderOutput {
        match self.state {
            ViewState::Loading => RenderOutput::Loading,
            ViewState::Error => RenderOutput::Error,
            ViewState::Redirecting => RenderOutput::Nothing,
            ViewState::Ready => match (self.data.as_ref(), self.form.as_ref()) {
                (Some(data), Some(form)) => RenderOutput::Form(FormRender {
                    title: form.title.clone(),
                    fields: form.resolve_fields(data),
                    remove_panel: self.remove_panel(data),
                }),
                // Ready without data/form cannot be reached through mount;
                // degrade to the error branch rather than panic.
                _ => RenderOutput::Error,
            },
        }
    }

    /// The danger panel renders only for admins, on non-default
    /// organizations, when the caller has somewhere left to go.
    fn remove_panel(&self, data: &Organization) -> Option<RemovePanel> {
        let has_multiple_orgs = self.store.all().len() > 1;
        if !data.is_admin() || data.is_default || !has_multiple_orgs {
            return None;
        }

        Some(RemovePanel {
            title: format!("Remove {} organization", data.name),
            confirmation: format!(
                "Removing the organization, {} is permanent and cannot be undone! \
                 Are you sure you want to continue?",
                data.name
            ),
            project_slugs: data.projects.iter().map(|p| p.slug.clone()).collect(),
        })
    }

    fn transition(&mut self, to: ViewState) -> Result<(), ViewError> {
        validate_transition(self.state, to)?;
        self.state = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use crate::error::{ApiError, FormLoadError};
    use crate::form::MockFormLoader;
    use crate::store::{MockOrganizationsStore, OrganizationSummary};
    use std::sync::Mutex;

    #[derive(Default)]
    struct NullActions;

    impl OrganizationActions for NullActions {
        fn rename(&self, _prev: &Organization, _next: &Organization) {}
        fn update(&self, _next: &Organization) {}
        fn remove_and_redirect(&self, _org_id: &str, _success: &str, _error: &str) {}
    }

    #[derive(Default)]
    struct RouteLog {
        pushed: Mutex<Vec<String>>,
        replaced: Mutex<Vec<String>>,
    }

    impl Navigator for RouteLog {
        fn push(&self, route: &str) {
            self.pushed.lock().unwrap().push(route.to_string());
        }
        fn replace(&self, route: &str) {
            self.replaced.lock().unwrap().push(route.to_string());
        }
    }

    fn org(access: &[&str]) -> Organization {
        Organization::new("1", "acme", "Acme").with_access(access.iter().copied())
    }

    fn store_with(count: usize) -> MockOrganizationsStore {
        let mut store = MockOrganizationsStore::new();
        store.expect_subscribe().return_const(());
        store.expect_unsubscribe().return_const(());
        store.expect_all().returning(move || {
            (0..count)
                .map(|i| OrganizationSummary::new(i.to_string(), format!("org-{i}"), format!("Org {i}")))
                .collect()
        });
        store
    }

    fn view_with(
        api: MockApiClient,
        forms: MockFormLoader,
        store: MockOrganizationsStore,
        navigator: Arc<RouteLog>,
    ) -> SettingsView {
        SettingsView::new(
            ViewConfig::new("acme"),
            Arc::new(api),
            Arc::new(forms),
            Arc::new(store),
            Arc::new(NullActions),
            navigator,
        )
    }

    fn loader_ok() -> MockFormLoader {
        let mut forms = MockFormLoader::new();
        forms
            .expect_load()
            .returning(|| Ok(SettingsForm::organization_general()));
        forms
    }

    #[tokio::test]
    async fn mount_reaches_ready_with_write_access() {
        let mut api = MockApiClient::new();
        let data = org(&["org:write"]);
        api.expect_fetch_organization()
            .returning(move |_| Ok(data.clone()));

        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, loader_ok(), store_with(1), Arc::clone(&navigator));

        assert_eq!(view.render(), RenderOutput::Loading);
        let state = view.mount().await.unwrap();
        assert_eq!(state, ViewState::Ready);
        assert!(navigator.pushed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mount_redirects_without_write_access() {
        let mut api = MockApiClient::new();
        let data = org(&["org:read"]);
        api.expect_fetch_organization()
            .returning(move |_| Ok(data.clone()));

        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, loader_ok(), store_with(1), Arc::clone(&navigator));

        let state = view.mount().await.unwrap();
        assert_eq!(state, ViewState::Redirecting);
        assert_eq!(view.render(), RenderOutput::Nothing);
        assert_eq!(
            *navigator.pushed.lock().unwrap(),
            vec!["/settings/organization/acme/teams/"]
        );
    }

    #[tokio::test]
    async fn mount_error_on_fetch_failure() {
        let mut api = MockApiClient::new();
        api.expect_fetch_organization()
            .returning(|_| Err(ApiError::FetchFailed));

        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, loader_ok(), store_with(1), navigator);

        let state = view.mount().await.unwrap();
        assert_eq!(state, ViewState::Error);
        assert_eq!(view.render(), RenderOutput::Error);
    }

    #[tokio::test]
    async fn mount_error_on_form_load_failure() {
        let mut api = MockApiClient::new();
        let data = org(&["org:write"]);
        api.expect_fetch_organization()
            .returning(move |_| Ok(data.clone()));

        let mut forms = MockFormLoader::new();
        forms
            .expect_load()
            .returning(|| Err(FormLoadError::Unavailable("chunk missing".to_string())));

        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, forms, store_with(1), navigator);

        let state = view.mount().await.unwrap();
        assert_eq!(state, ViewState::Error);
    }

    #[tokio::test]
    async fn mounting_twice_is_an_illegal_transition() {
        let mut api = MockApiClient::new();
        let data = org(&["org:write"]);
        api.expect_fetch_organization()
            .returning(move |_| Ok(data.clone()));

        let mut forms = MockFormLoader::new();
        forms
            .expect_load()
            .returning(|| Ok(SettingsForm::organization_general()));

        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, forms, store_with(1), navigator);

        view.mount().await.unwrap();
        let err = view.mount().await.unwrap_err();
        assert!(matches!(err, ViewError::IllegalTransition { .. }));
    }

    #[tokio::test]
    async fn save_before_ready_is_rejected() {
        let api = MockApiClient::new();
        let forms = MockFormLoader::new();
        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, forms, store_with(1), navigator);

        let prev = org(&["org:write"]);
        let next = prev.clone();
        assert!(matches!(
            view.handle_save(&prev, next),
            Err(ViewError::NotReady)
        ));
    }

    #[tokio::test]
    async fn remove_without_data_is_ignored() {
        let api = MockApiClient::new();
        let forms = MockFormLoader::new();
        let navigator = Arc::new(RouteLog::default());
        let view = view_with(api, forms, store_with(5), navigator);

        assert_eq!(view.handle_remove(), RemoveOutcome::Ignored);
    }

    #[tokio::test]
    async fn unmount_releases_the_subscription_once() {
        let api = MockApiClient::new();
        let forms = MockFormLoader::new();
        let mut store = MockOrganizationsStore::new();
        store.expect_subscribe().times(0).return_const(());
        store.expect_unsubscribe().times(0).return_const(());

        let navigator = Arc::new(RouteLog::default());
        let mut view = view_with(api, forms, store, navigator);

        // Never mounted: nothing to release.
        view.unmount();
        view.unmount();
    }
}
