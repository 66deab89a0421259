//! End-to-end sidebar flows: load, select, group, drag, re-render

use crate::fixtures::{write_temp, SIDEBAR_SNAPSHOT};
use mimic_core::config::SidebarConfig;
use mimic_core::matching::MockRequest;
use mimic_core::sidebar::{ClickButton, ClickIntent, DropOutcome, Modifiers, SidebarController};
use mimic_core::store::MockCollectionStore;
use mimic_core::types::entry::SidebarEntry;
use mimic_core::types::mock::HttpMethod;
use rstest::rstest;

async fn load_store() -> MockCollectionStore {
    let file = write_temp(SIDEBAR_SNAPSHOT, ".yaml");
    let path = file.path().to_str().expect("Should be utf-8 path");
    MockCollectionStore::load(path)
        .await
        .expect("Should load store")
}

fn click(
    controller: &mut SidebarController,
    store: &MockCollectionStore,
    id: &str,
    modifiers: Modifiers,
) -> ClickIntent {
    controller.click(store, SidebarEntry::mock(id), ClickButton::Primary, modifiers)
}

#[rstest]
#[tokio::test]
async fn test_range_then_group_then_render() {
    let mut store = load_store().await;
    let mut controller = SidebarController::default();
    controller.activate(&mut store);

    click(&mut controller, &store, "health", Modifiers::NONE);
    click(&mut controller, &store, "logout", Modifiers::shift());
    click(&mut controller, &store, "get-user", Modifiers::meta());
    assert_eq!(controller.selection().len(), 4);

    let group = controller
        .group_selection(&mut store)
        .expect("Should group selection");

    // three standalone moved, one grouped copy
    assert_eq!(group.mocks.len(), 4);
    assert_eq!(store.mocks().len(), 6);
    assert_eq!(store.get_group("users").expect("users").mocks.len(), 2);
    assert!(store.ungrouped_mocks().next().is_none());

    // one render per store notification
    let rendered = controller.run_tick(&store);
    assert!(rendered >= 4);
    let view = controller.view();
    assert_eq!(view.groups.len(), 2);
    assert!(view.mocks.is_empty());
    assert_eq!(view.groups[1].member_count, 4);
    assert!(view.groups[1].open);
    assert!(view.groups[1].mocks[0].selected);
}

#[rstest]
#[tokio::test]
async fn test_right_click_keeps_multi_selection() {
    let store = load_store().await;
    let mut controller = SidebarController::default();

    click(&mut controller, &store, "login", Modifiers::NONE);
    click(&mut controller, &store, "logout", Modifiers::ctrl());
    let intent = controller.click(
        &store,
        SidebarEntry::mock("health"),
        ClickButton::Secondary,
        Modifiers::NONE,
    );

    assert_eq!(intent, ClickIntent::Preserve);
    assert_eq!(controller.selection().len(), 2);
    assert!(!controller.selection().contains(&SidebarEntry::mock("health")));
}

#[rstest]
#[tokio::test]
async fn test_drag_grouped_mock_out_and_back() {
    let mut store = load_store().await;
    let mut controller = SidebarController::new(SidebarConfig::default());

    controller.begin_drag("get-user");
    let outcome = controller
        .drop_on_sidebar(&mut store)
        .expect("Should drop on sidebar");
    assert!(matches!(outcome, DropOutcome::Ungrouped { .. }));
    assert_eq!(store.get_group("users").expect("users").mocks, vec!["list-users"]);

    controller.begin_drag("get-user");
    let outcome = controller
        .drop_on_group(&mut store, "users")
        .expect("Should drop on group");
    assert!(matches!(outcome, DropOutcome::Regrouped { .. }));
    assert_eq!(
        store.get_group("users").expect("users").mocks,
        vec!["list-users", "get-user"]
    );
}

#[rstest]
#[tokio::test]
async fn test_loaded_mocks_match_requests() {
    let mut store = load_store().await;

    let matches = store.get_matching_mocks(&MockRequest::new(HttpMethod::Get, "/api/users/42"));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "get-user");

    store.toggle_group("users").expect("Should toggle group");
    let matches = store.get_matching_mocks(&MockRequest::new(HttpMethod::Get, "/api/users/42"));
    assert!(matches.is_empty());
}
