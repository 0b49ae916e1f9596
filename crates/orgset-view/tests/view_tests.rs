use orgset_test_utils::{
    admin_organization, sample_organization, setup_failing_view, setup_settings_view, ActionEvent,
    NavEvent,
};
use orgset_view::{RemoveOutcome, RenderOutput, SaveOutcome, ViewState};

#[tokio::test]
async fn read_only_access_redirects_without_rendering_a_form() {
    let org = sample_organization().with_access(["org:read"]);
    let mut harness = setup_settings_view(org, 2);

    let state = harness.view.mount().await.unwrap();

    assert_eq!(state, ViewState::Redirecting);
    assert_eq!(harness.view.render(), RenderOutput::Nothing);
    assert_eq!(
        harness.navigator.events(),
        vec![NavEvent::Pushed(
            "/settings/organization/acme/teams/".to_string()
        )]
    );
}

#[tokio::test]
async fn admin_with_multiple_orgs_sees_the_remove_panel() {
    let mut harness = setup_settings_view(admin_organization(), 2);
    harness.view.mount().await.unwrap();

    let RenderOutput::Form(form) = harness.view.render() else {
        panic!("expected form branch");
    };
    let panel = form.remove_panel.expect("remove panel");
    assert_eq!(panel.title, "Remove Acme organization");
    assert!(panel.confirmation.contains("Acme"));
    assert_eq!(panel.project_slugs, vec!["backend", "frontend"]);
}

#[tokio::test]
async fn write_access_renders_the_form_without_the_remove_panel() {
    let mut harness = setup_settings_view(sample_organization(), 2);
    harness.view.mount().await.unwrap();

    let RenderOutput::Form(form) = harness.view.render() else {
        panic!("expected form branch");
    };
    assert_eq!(form.title, "Organization Settings");
    assert_eq!(form.fields.len(), 2);
    assert!(form.remove_panel.is_none());
}

#[tokio::test]
async fn no_remove_panel_for_sole_or_default_organizations() {
    let mut harness = setup_settings_view(admin_organization(), 1);
    harness.view.mount().await.unwrap();
    let RenderOutput::Form(form) = harness.view.render() else {
        panic!("expected form branch");
    };
    assert!(form.remove_panel.is_none());

    let mut harness = setup_settings_view(admin_organization().default_org(), 2);
    harness.view.mount().await.unwrap();
    let RenderOutput::Form(form) = harness.view.render() else {
        panic!("expected form branch");
    };
    assert!(form.remove_panel.is_none());
}

#[tokio::test]
async fn fetch_failure_reports_a_generic_error() {
    let mut harness = setup_failing_view(2);

    let state = harness.view.mount().await.unwrap();

    assert_eq!(state, ViewState::Error);
    assert_eq!(harness.view.render(), RenderOutput::Error);
    assert!(harness.navigator.events().is_empty());
    assert!(harness.actions.events().is_empty());
}

#[tokio::test]
async fn slug_change_dispatches_rename_and_replaces_the_location() {
    let mut harness = setup_settings_view(sample_organization(), 2);
    harness.view.mount().await.unwrap();

    let prev = sample_organization();
    let mut next = sample_organization();
    next.slug = "new-acme".to_string();

    let outcome = harness.view.handle_save(&prev, next).unwrap();

    assert_eq!(outcome, SaveOutcome::Renamed);
    assert_eq!(
        harness.actions.events(),
        vec![ActionEvent::Renamed {
            from: "acme".to_string(),
            to: "new-acme".to_string(),
        }]
    );
    assert_eq!(
        harness.navigator.events(),
        vec![NavEvent::Replaced(
            "/settings/organization/new-acme/settings/".to_string()
        )]
    );
    // The stale page is not re-rendered with the new data.
    assert_eq!(harness.view.data().unwrap().slug, "acme");
}

#[tokio::test]
async fn unchanged_slug_updates_in_place_without_navigation() {
    let mut harness = setup_settings_view(sample_organization(), 2);
    harness.view.mount().await.unwrap();

    let prev = sample_organization();
    let mut next = sample_organization();
    next.name = "Acme Renamed".to_string();

    let outcome = harness.view.handle_save(&prev, next).unwrap();

    assert_eq!(outcome, SaveOutcome::Updated);
    assert_eq!(
        harness.actions.events(),
        vec![ActionEvent::Updated {
            slug: "acme".to_string(),
        }]
    );
    assert!(harness.navigator.events().is_empty());
    assert_eq!(harness.view.state(), ViewState::Ready);
    assert_eq!(harness.view.data().unwrap().name, "Acme Renamed");
}

#[tokio::test]
async fn removal_is_ignored_for_the_only_organization() {
    let mut harness = setup_settings_view(admin_organization(), 1);
    harness.view.mount().await.unwrap();

    assert_eq!(harness.view.handle_remove(), RemoveOutcome::Ignored);
    assert!(harness.actions.events().is_empty());
}

#[tokio::test]
async fn removal_dispatches_with_named_messages() {
    let mut harness = setup_settings_view(admin_organization(), 2);
    harness.view.mount().await.unwrap();

    assert_eq!(harness.view.handle_remove(), RemoveOutcome::Dispatched);
    assert_eq!(
        harness.actions.events(),
        vec![ActionEvent::Removed {
            org_id: "acme".to_string(),
            success_message: "Acme is queued for deletion.".to_string(),
            error_message: "Error removing the Acme organization".to_string(),
        }]
    );
}

#[tokio::test]
async fn mount_and_unmount_balance_the_store_subscription() {
    let mut harness = setup_settings_view(sample_organization(), 2);
    harness.view.mount().await.unwrap();

    assert_eq!(harness.store.subscribe_count(), 1);
    assert_eq!(harness.store.unsubscribe_count(), 0);

    harness.view.unmount();
    harness.view.unmount();

    assert_eq!(harness.store.unsubscribe_count(), 1);
}
