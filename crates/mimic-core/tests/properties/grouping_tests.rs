//! Property-based tests for grouping a selection

use mimic_core::config::snapshot::{GroupSeed, Snapshot};
use mimic_core::sidebar::{create_group_from_selection, SelectionEngine};
use mimic_core::store::MockCollectionStore;
use mimic_core::types::entry::SidebarEntry;
use mimic_core::types::mock::{HttpMethod, Mock, MockResponse};
use proptest::prelude::*;

/// Mocks as `true` (grouped under `g0`) or `false` (standalone)
fn build_store(layout: &[bool]) -> MockCollectionStore {
    let mocks = layout
        .iter()
        .enumerate()
        .map(|(i, grouped)| Mock {
            id: format!("m{}", i),
            name: format!("mock {}", i),
            method: HttpMethod::Post,
            url: format!("/items/{}", i),
            is_active: i % 3 != 0,
            group_id: grouped.then(|| "g0".to_string()),
            response: MockResponse::default(),
        })
        .collect();
    MockCollectionStore::from_snapshot(Snapshot {
        groups: vec![GroupSeed {
            id: "g0".to_string(),
            name: "existing".to_string(),
            active: true,
        }],
        mocks,
    })
    .expect("Should build store")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Grouped mocks are copied and standalone mocks are moved.
    #[test]
    fn prop_grouping_moves_standalone_and_clones_grouped(
        layout in proptest::collection::vec(any::<bool>(), 1..15),
        picks in proptest::collection::vec(any::<bool>(), 15),
    ) {
        let mut store = build_store(&layout);
        let existing_members = store.get_group("g0").expect("g0").mocks.clone();

        let mut engine = SelectionEngine::new();
        let mut grouped_picked = 0;
        let mut standalone_picked = 0;
        for (i, grouped) in layout.iter().enumerate() {
            if picks[i] {
                engine.select_single(SidebarEntry::mock(format!("m{}", i)), true);
                if *grouped {
                    grouped_picked += 1;
                } else {
                    standalone_picked += 1;
                }
            }
        }

        let outcome = create_group_from_selection(&mut store, engine.selection(), "Grouped Mocks")
            .expect("Should group");

        prop_assert_eq!(outcome.cloned.len(), grouped_picked);
        prop_assert_eq!(outcome.moved.len(), standalone_picked);
        prop_assert_eq!(outcome.group.mocks.len(), grouped_picked + standalone_picked);
        prop_assert_eq!(store.mocks().len(), layout.len() + grouped_picked);
        prop_assert_eq!(&store.get_group("g0").expect("g0").mocks, &existing_members);
        for mock_id in &outcome.moved {
            let mock = store.get_mock(mock_id).expect("moved mock");
            prop_assert_eq!(mock.group_id.as_deref(), Some(outcome.group.id.as_str()));
        }
    }
}
