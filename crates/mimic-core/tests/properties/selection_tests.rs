//! Property-based tests for range selection over the flattened order

use mimic_core::config::snapshot::Snapshot;
use mimic_core::sidebar::{FlattenedOrder, SelectionEngine, SidebarFilter};
use mimic_core::store::MockCollectionStore;
use mimic_core::types::entry::SidebarEntry;
use mimic_core::types::mock::{HttpMethod, Mock, MockResponse};
use proptest::prelude::*;
use std::collections::HashSet;

fn standalone_store(count: usize) -> MockCollectionStore {
    let mocks = (0..count)
        .map(|i| Mock {
            id: format!("m{}", i),
            name: format!("mock {}", i),
            method: HttpMethod::Get,
            url: format!("/api/{}", i),
            is_active: true,
            group_id: None,
            response: MockResponse::default(),
        })
        .collect();
    MockCollectionStore::from_snapshot(Snapshot {
        groups: Vec::new(),
        mocks,
    })
    .expect("Should build store")
}

fn range_selection(order: &FlattenedOrder, anchor: usize, target: usize) -> HashSet<SidebarEntry> {
    let mut engine = SelectionEngine::new();
    engine.select_single(order.entries()[anchor].clone(), false);
    engine.select_range(&order.entries()[target].clone(), order);
    engine.selection().entries().iter().cloned().collect()
}

/// Store size plus two indices into it
fn arb_range() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..20).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Selecting a..b and b..a covers the same entries.
    #[test]
    fn prop_range_is_endpoint_order_independent((len, a, b) in arb_range()) {
        let store = standalone_store(len);
        let order = FlattenedOrder::build(&store, &SidebarFilter::new());

        let forward = range_selection(&order, a, b);
        let backward = range_selection(&order, b, a);

        prop_assert_eq!(forward.len(), a.abs_diff(b) + 1);
        prop_assert_eq!(forward, backward);
    }

    /// A range click keeps every earlier selection and never duplicates.
    #[test]
    fn prop_range_extends_existing_selection(
        (len, a, b) in arb_range(),
        extra in proptest::collection::vec(0usize..20, 0..5),
    ) {
        let store = standalone_store(len);
        let order = FlattenedOrder::build(&store, &SidebarFilter::new());

        let mut engine = SelectionEngine::new();
        engine.select_single(order.entries()[a].clone(), false);
        for i in extra.into_iter().filter(|i| *i < len) {
            engine.select_single(order.entries()[i].clone(), true);
        }
        let before: Vec<SidebarEntry> = engine.selection().entries().to_vec();

        engine.select_range(&order.entries()[b].clone(), &order);
        let after = engine.selection().entries();

        prop_assert_eq!(&after[..before.len()], &before[..]);
        let unique: HashSet<&SidebarEntry> = after.iter().collect();
        prop_assert_eq!(unique.len(), after.len());
        for entry in order.between(a, b) {
            prop_assert!(engine.selection().contains(entry));
        }
    }
}
