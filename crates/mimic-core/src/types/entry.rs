//! Selectable sidebar entries.

use crate::types::group::{Group, GroupId};
use crate::types::mock::{Mock, MockId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Mock,
    Group,
}

/// A row the user can select: a mock (standalone or inside a group) or a group header.
///
/// Identity is the pair of kind and id, so a mock and a group sharing an id
/// string never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum SidebarEntry {
    Mock(MockId),
    Group(GroupId),
}

impl SidebarEntry {
    /// Entry for a mock row
    pub fn mock(id: impl Into<MockId>) -> Self {
        Self::Mock(id.into())
    }

    /// Entry for a group header
    pub fn group(id: impl Into<GroupId>) -> Self {
        Self::Group(id.into())
    }

    /// Id of the mock or group
    pub fn id(&self) -> &str {
        match self {
            Self::Mock(id) | Self::Group(id) => id,
        }
    }

    /// Whether this is a mock or a group
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Mock(_) => EntryKind::Mock,
            Self::Group(_) => EntryKind::Group,
        }
    }

    /// Mock id, if this entry is a mock
    pub fn as_mock_id(&self) -> Option<&MockId> {
        match self {
            Self::Mock(id) => Some(id),
            Self::Group(_) => None,
        }
    }

    /// Group id, if this entry is a group
    pub fn as_group_id(&self) -> Option<&GroupId> {
        match self {
            Self::Group(id) => Some(id),
            Self::Mock(_) => None,
        }
    }
}

impl From<&Mock> for SidebarEntry {
    fn from(mock: &Mock) -> Self {
        Self::Mock(mock.id.clone())
    }
}

impl From<&Group> for SidebarEntry {
    fn from(group: &Group) -> Self {
        Self::Group(group.id.clone())
    }
}

impl fmt::Display for SidebarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mock(id) => write!(f, "mock:{}", id),
            Self::Group(id) => write!(f, "group:{}", id),
        }
    }
}
