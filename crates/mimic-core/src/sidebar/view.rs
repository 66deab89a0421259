//! Render model of the sidebar handed to the presentation layer.

use crate::sidebar::flatten::SidebarFilter;
use crate::sidebar::selection::SelectionList;
use crate::store::MockCollectionStore;
use crate::types::entry::SidebarEntry;
use crate::types::group::{Group, GroupId};
use crate::types::mock::{HttpMethod, Mock};
use serde::Serialize;
use std::collections::HashSet;

/// Expanded/collapsed flag per group. Local UI state, never stored.
///
/// Groups start collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<GroupId>,
}

impl ExpansionState {
    /// Check if a group is expanded
    pub fn is_open(&self, group_id: &str) -> bool {
        self.open.contains(group_id)
    }

    /// Expand a group
    pub fn expand(&mut self, group_id: impl Into<GroupId>) {
        self.open.insert(group_id.into());
    }

    /// Collapse a group
    pub fn collapse(&mut self, group_id: &str) {
        self.open.remove(group_id);
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self, group_id: &str) -> bool {
        if self.open.remove(group_id) {
            false
        } else {
            self.open.insert(group_id.to_string());
            true
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockRow {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub active: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRow {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub selected: bool,
    pub open: bool,
    /// Members passing the custom filter, shown in the header
    pub member_count: usize,
    /// Visible member rows; empty while collapsed
    pub mocks: Vec<MockRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    pub groups: Vec<GroupRow>,
    pub mocks: Vec<MockRow>,
    pub width: u32,
}

impl SidebarView {
    /// Build the view from current store state. Groups are listed before
    /// standalone mocks.
    pub fn build(
        store: &MockCollectionStore,
        filter: &SidebarFilter,
        selection: &SelectionList,
        expansion: &ExpansionState,
        width: u32,
    ) -> Self {
        let groups = filter
            .visible_groups(store)
            .into_iter()
            .map(|(group, members)| group_row(group, &members, selection, expansion))
            .collect();
        let mocks = filter
            .visible_standalone(store)
            .into_iter()
            .map(|mock| mock_row(mock, selection))
            .collect();

        Self {
            groups,
            mocks,
            width,
        }
    }
}

fn mock_row(mock: &Mock, selection: &SelectionList) -> MockRow {
    MockRow {
        id: mock.id.clone(),
        name: mock.name.clone(),
        method: mock.method,
        url: mock.url.clone(),
        active: mock.is_active,
        selected: selection.contains(&SidebarEntry::from(mock)),
    }
}

fn group_row(
    group: &Group,
    members: &[&Mock],
    selection: &SelectionList,
    expansion: &ExpansionState,
) -> GroupRow {
    let open = expansion.is_open(&group.id);
    let mocks = if open {
        members.iter().map(|mock| mock_row(mock, selection)).collect()
    } else {
        Vec::new()
    };

    GroupRow {
        id: group.id.clone(),
        name: group.name.clone(),
        active: group.active,
        selected: selection.contains(&SidebarEntry::from(group)),
        open,
        member_count: members.len(),
        mocks,
    }
}
