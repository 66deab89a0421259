//! Turning a selection into a new group.

use crate::error::StoreError;
use crate::sidebar::selection::SelectionList;
use crate::store::collection::validate_url;
use crate::store::MockCollectionStore;
use crate::types::entry::SidebarEntry;
use crate::types::group::{Group, NewGroup};
use crate::types::mock::{MockId, MockPatch, NewMock};
use tracing::{debug, warn};

/// What `create_group_from_selection` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingOutcome {
    /// The new group, with its final member list
    pub group: Group,
    /// Standalone mocks moved into the group
    pub moved: Vec<MockId>,
    /// Grouped mocks copied into the group, as `(original, copy)`
    pub cloned: Vec<(MockId, MockId)>,
    /// Selected groups that were ignored
    pub skipped_groups: usize,
}

/// Create a group named `name` holding the selected mocks.
///
/// Standalone mocks are moved into the new group. Mocks that already belong
/// to a group are copied with a fresh id and the original stays where it
/// was. Selected groups are skipped since groups do not nest. Selected mocks
/// no longer in the store are skipped.
///
/// Every copy is checked before the group is created, so a rejected grouping
/// leaves the store untouched.
pub fn create_group_from_selection(
    store: &mut MockCollectionStore,
    selection: &SelectionList,
    name: &str,
) -> Result<GroupingOutcome, StoreError> {
    check_clonable(store, selection)?;
    let group = store.add_group(NewGroup::new(name))?;

    let mut moved = Vec::new();
    let mut cloned = Vec::new();
    let mut skipped_groups = 0;

    for entry in selection.entries() {
        let mock_id = match entry {
            SidebarEntry::Group(group_id) => {
                debug!(group_id = %group_id, "Skipping selected group");
                skipped_groups += 1;
                continue;
            }
            SidebarEntry::Mock(mock_id) => mock_id,
        };

        let Some(mock) = store.get_mock(mock_id) else {
            warn!(mock_id = %mock_id, "Selected mock no longer exists");
            continue;
        };

        if mock.group_id.is_some() {
            let copy = NewMock::from(mock).with_group(group.id.clone());
            let created = store.mock_request(copy)?;
            cloned.push((mock_id.clone(), created.id));
        } else {
            store.update_mock(mock_id, MockPatch::assign_group(group.id.clone()))?;
            moved.push(mock_id.clone());
        }
    }

    let group = store
        .get_group(&group.id)
        .cloned()
        .ok_or_else(|| StoreError::GroupNotFound {
            group_id: group.id.clone(),
        })?;

    debug!(
        group_id = %group.id,
        moved = moved.len(),
        cloned = cloned.len(),
        "Group created from selection"
    );

    Ok(GroupingOutcome {
        group,
        moved,
        cloned,
        skipped_groups,
    })
}

/// Fail if any selected grouped mock would be rejected when copied.
fn check_clonable(
    store: &MockCollectionStore,
    selection: &SelectionList,
) -> Result<(), StoreError> {
    selection
        .mock_ids()
        .filter_map(|mock_id| store.get_mock(mock_id))
        .filter(|mock| mock.group_id.is_some())
        .try_for_each(|mock| validate_url(&mock.url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::snapshot::{GroupSeed, Snapshot};
    use crate::sidebar::selection::SelectionEngine;
    use crate::types::mock::{HttpMethod, Mock, MockResponse};
    use rstest::rstest;

    fn mock(id: &str, group_id: Option<&str>) -> Mock {
        Mock {
            id: id.to_string(),
            name: format!("{} mock", id),
            method: HttpMethod::Put,
            url: format!("/{}", id),
            is_active: id != "g1-b",
            group_id: group_id.map(str::to_string),
            response: MockResponse {
                status: 418,
                ..MockResponse::default()
            },
        }
    }

    fn create_test_store() -> MockCollectionStore {
        MockCollectionStore::from_snapshot(Snapshot {
            groups: vec![GroupSeed {
                id: "g1".to_string(),
                name: "existing".to_string(),
                active: true,
            }],
            mocks: vec![
                mock("a", None),
                mock("b", None),
                mock("g1-a", Some("g1")),
                mock("g1-b", Some("g1")),
            ],
        })
        .expect("Should build store")
    }

    fn selection(entries: &[SidebarEntry]) -> SelectionList {
        let mut engine = SelectionEngine::new();
        for entry in entries {
            engine.select_single(entry.clone(), true);
        }
        engine.selection().clone()
    }

    #[rstest]
    fn test_standalone_mocks_are_moved() {
        let mut store = create_test_store();
        let selection = selection(&[SidebarEntry::mock("b"), SidebarEntry::mock("a")]);

        let outcome = create_group_from_selection(&mut store, &selection, "Grouped Mocks")
            .expect("Should group");

        assert_eq!(outcome.group.mocks, vec!["b", "a"]);
        assert_eq!(outcome.moved, vec!["b", "a"]);
        assert!(outcome.cloned.is_empty());
        assert_eq!(store.mocks().len(), 4);
        assert_eq!(
            store.get_mock("a").expect("a").group_id.as_deref(),
            Some(outcome.group.id.as_str())
        );
    }

    #[rstest]
    fn test_grouped_mocks_are_cloned() {
        let mut store = create_test_store();
        let before: Vec<Mock> = store.group_mocks("g1").into_iter().cloned().collect();
        let selection = selection(&[SidebarEntry::mock("g1-a"), SidebarEntry::mock("g1-b")]);

        let outcome =
            create_group_from_selection(&mut store, &selection, "copies").expect("Should group");

        assert_eq!(outcome.group.mocks.len(), 2);
        assert_eq!(store.mocks().len(), 6);
        let after: Vec<Mock> = store.group_mocks("g1").into_iter().cloned().collect();
        assert_eq!(before, after);

        for ((original_id, copy_id), member) in outcome.cloned.iter().zip(&outcome.group.mocks) {
            assert_eq!(copy_id, member);
            let original = store.get_mock(original_id).expect("original");
            let copy = store.get_mock(copy_id).expect("copy");
            assert_ne!(original.id, copy.id);
            assert_eq!(
                Mock {
                    id: original.id.clone(),
                    group_id: original.group_id.clone(),
                    ..copy.clone()
                },
                *original
            );
        }
    }

    #[rstest]
    fn test_mixed_selection_skips_groups() {
        let mut store = create_test_store();
        let selection = selection(&[
            SidebarEntry::group("g1"),
            SidebarEntry::mock("g1-a"),
            SidebarEntry::mock("a"),
            SidebarEntry::mock("deleted"),
        ]);

        let outcome =
            create_group_from_selection(&mut store, &selection, "mixed").expect("Should group");

        assert_eq!(outcome.skipped_groups, 1);
        assert_eq!(outcome.moved, vec!["a"]);
        assert_eq!(outcome.cloned.len(), 1);
        assert_eq!(outcome.group.mocks.len(), 2);
        assert_eq!(outcome.group.first_mock(), Some(&outcome.cloned[0].1));
        assert_eq!(store.groups().len(), 2);
    }

    #[rstest]
    fn test_rejected_group_creation_propagates() {
        let mut store = create_test_store();
        let selection = selection(&[SidebarEntry::mock("a")]);

        let result = create_group_from_selection(&mut store, &selection, "  ");

        assert!(matches!(
            result.unwrap_err(),
            StoreError::InvalidGroupName { .. }
        ));
        assert_eq!(store.get_mock("a").expect("a").group_id, None);
    }

    #[rstest]
    fn test_rejected_copy_leaves_store_untouched() {
        let mut store = create_test_store();
        store.set_url_unchecked("g1-b", "");
        let groups_before = store.groups().to_vec();
        let mocks_before = store.mocks().to_vec();
        let selection = selection(&[SidebarEntry::mock("a"), SidebarEntry::mock("g1-b")]);

        let result = create_group_from_selection(&mut store, &selection, "Grouped Mocks");

        assert!(matches!(result.unwrap_err(), StoreError::InvalidUrl { .. }));
        assert_eq!(store.groups(), groups_before.as_slice());
        assert_eq!(store.mocks(), mocks_before.as_slice());
        assert_eq!(store.get_mock("a").expect("a").group_id, None);
    }
}
