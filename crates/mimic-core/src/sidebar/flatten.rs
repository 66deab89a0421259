//! Display filters and the flattened order used for range selection.

use crate::store::MockCollectionStore;
use crate::types::entry::SidebarEntry;
use crate::types::group::Group;
use crate::types::mock::Mock;
use std::fmt;

/// Extra predicate applied to every mock, grouped or standalone.
pub type MockPredicate = Box<dyn Fn(&Mock) -> bool + Send>;

/// Search term plus an optional custom predicate.
///
/// The two filters are independent; a mock is shown only if both pass.
#[derive(Default)]
pub struct SidebarFilter {
    search_term: String,
    custom: Option<MockPredicate>,
}

impl SidebarFilter {
    /// Filter that shows everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set_search_term`
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Current search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Set the url search term; empty shows everything
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Install a predicate applied to grouped and standalone mocks
    pub fn set_custom<F>(&mut self, predicate: F)
    where
        F: Fn(&Mock) -> bool + Send + 'static,
    {
        self.custom = Some(Box::new(predicate));
    }

    /// Remove the custom predicate
    pub fn clear_custom(&mut self) {
        self.custom = None;
    }

    /// Substring match of the search term against the mock url
    pub fn mock_passes_search(&self, mock: &Mock) -> bool {
        mock.url.contains(self.search_term.as_str())
    }

    /// Check a mock against the custom predicate, if any
    pub fn mock_passes_custom(&self, mock: &Mock) -> bool {
        self.custom.as_ref().map_or(true, |predicate| predicate(mock))
    }

    /// A group passes if its name contains the term or any member url does.
    pub fn group_passes(&self, group: &Group, members: &[&Mock]) -> bool {
        if self.search_term.is_empty() || group.name.contains(self.search_term.as_str()) {
            return true;
        }
        members.iter().any(|mock| self.mock_passes_search(mock))
    }

    /// Groups passing the filter, each with its members that pass the custom predicate.
    ///
    /// Members of a passing group are not filtered by the search term.
    pub fn visible_groups<'s>(
        &self,
        store: &'s MockCollectionStore,
    ) -> Vec<(&'s Group, Vec<&'s Mock>)> {
        store
            .groups()
            .iter()
            .filter_map(|group| {
                let members = store.group_mocks(&group.id);
                if !self.group_passes(group, &members) {
                    return None;
                }
                let shown = members
                    .into_iter()
                    .filter(|mock| self.mock_passes_custom(mock))
                    .collect();
                Some((group, shown))
            })
            .collect()
    }

    /// Ungrouped mocks passing both filters, in display order
    pub fn visible_standalone<'s>(&self, store: &'s MockCollectionStore) -> Vec<&'s Mock> {
        store
            .ungrouped_mocks()
            .filter(|mock| self.mock_passes_search(mock) && self.mock_passes_custom(mock))
            .collect()
    }
}

impl fmt::Debug for SidebarFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarFilter")
            .field("search_term", &self.search_term)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Linear order of mock entries: members of each visible group, then
/// visible standalone mocks.
///
/// Rebuilt from the store on every use; never kept across mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedOrder {
    entries: Vec<SidebarEntry>,
}

impl FlattenedOrder {
    /// Flatten the current store state under `filter`
    pub fn build(store: &MockCollectionStore, filter: &SidebarFilter) -> Self {
        let grouped = filter
            .visible_groups(store)
            .into_iter()
            .flat_map(|(_, members)| members);
        let entries = grouped
            .chain(filter.visible_standalone(store))
            .map(SidebarEntry::from)
            .collect();
        Self { entries }
    }

    /// Entries in display order
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entry is visible
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of an entry, if visible
    pub fn position(&self, entry: &SidebarEntry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    /// Inclusive range between two positions, in either order.
    pub fn between(&self, a: usize, b: usize) -> &[SidebarEntry] {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let end = end.min(self.entries.len().saturating_sub(1));
        self.entries.get(start..=end).unwrap_or(&[])
    }
}
