//! Group types.

use crate::types::mock::MockId;
use serde::{Deserialize, Serialize};

/// Identifier of a group, assigned by the store.
pub type GroupId = String;

/// Named container of mocks with its own enable switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Whether member mocks may answer requests
    #[serde(default = "default_active")]
    pub active: bool,
    /// Member mock ids in display order (the store owns the mocks)
    #[serde(default)]
    pub mocks: Vec<MockId>,
}

fn default_active() -> bool {
    true
}

impl Group {
    /// Check if a mock is a member
    pub fn contains(&self, mock_id: &str) -> bool {
        self.mocks.iter().any(|id| id == mock_id)
    }

    /// Id of the mock in the first member slot.
    pub fn first_mock(&self) -> Option<&MockId> {
        self.mocks.first()
    }
}

/// Fields for a group about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
}

impl NewGroup {
    /// Create a group request with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
