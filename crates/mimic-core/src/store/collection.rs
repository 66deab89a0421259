//! Mock collection store.
//!
//! This module provides `MockCollectionStore`, the authoritative list of mocks
//! and groups the sidebar operates on. Every successful mutation notifies the
//! registered observers synchronously before returning.

use crate::config::snapshot::Snapshot;
use crate::error::{Error, StoreError};
use crate::matching::{mock_matches_request, MockRequest};
use crate::store::events::{EventKind, Observers, StoreEvent, SubscriptionId};
use crate::types::group::{Group, NewGroup};
use crate::types::mock::{Mock, MockPatch, NewMock};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Store of mocks and groups.
///
/// `MockCollectionStore` is responsible for:
/// - Assigning ids to new mocks and groups
/// - Rejecting mutations that would break group references
/// - Keeping each group's member list in step with mocks' `group_id`
/// - Notifying observers of `UPDATE_MOCK` / `UPDATE_GROUP` changes
#[derive(Debug, Default)]
pub struct MockCollectionStore {
    /// Mocks in display order
    mocks: Vec<Mock>,
    /// Groups in display order
    groups: Vec<Group>,
    observers: Observers,
}

impl MockCollectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot document.
    ///
    /// Group member lists are rebuilt from the mocks' `group_id`, in mock order.
    /// Fails on duplicate ids, a blank url, or a `group_id` naming a group not
    /// in the snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let mut group_ids = HashSet::new();
        let mut groups = Vec::with_capacity(snapshot.groups.len());
        for seed in snapshot.groups {
            if !group_ids.insert(seed.id.clone()) {
                return Err(StoreError::DuplicateId { id: seed.id });
            }
            groups.push(Group {
                id: seed.id,
                name: seed.name,
                active: seed.active,
                mocks: Vec::new(),
            });
        }

        let mut mock_ids = HashSet::new();
        for mock in &snapshot.mocks {
            if !mock_ids.insert(mock.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    id: mock.id.clone(),
                });
            }
            validate_url(&mock.url)?;
            if let Some(group_id) = &mock.group_id {
                let group = groups
                    .iter_mut()
                    .find(|g| &g.id == group_id)
                    .ok_or_else(|| StoreError::GroupNotFound {
                        group_id: group_id.clone(),
                    })?;
                group.mocks.push(mock.id.clone());
            }
        }

        debug!(
            mocks = snapshot.mocks.len(),
            groups = groups.len(),
            "Store seeded from snapshot"
        );

        Ok(Self {
            mocks: snapshot.mocks,
            groups,
            observers: Observers::default(),
        })
    }

    /// Read a snapshot file (YAML, JSON or JSONC) and build a store from it.
    pub async fn load(path: &str) -> Result<Self, Error> {
        let snapshot = Snapshot::load(path).await?;
        Ok(Self::from_snapshot(snapshot)?)
    }

    /// All mocks in display order
    pub fn mocks(&self) -> &[Mock] {
        &self.mocks
    }

    /// All groups in display order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Get a mock by id
    pub fn get_mock(&self, mock_id: &str) -> Option<&Mock> {
        self.mocks.iter().find(|m| m.id == mock_id)
    }

    /// Get a group by id
    pub fn get_group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Member mocks of a group, in member order.
    ///
    /// Returns an empty list for an unknown group.
    pub fn group_mocks(&self, group_id: &str) -> Vec<&Mock> {
        self.get_group(group_id)
            .map(|group| {
                group
                    .mocks
                    .iter()
                    .filter_map(|id| self.get_mock(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Mocks that belong to no group, in display order
    pub fn ungrouped_mocks(&self) -> impl Iterator<Item = &Mock> {
        self.mocks.iter().filter(|m| m.group_id.is_none())
    }

    /// Mocks that would answer the request, in display order.
    ///
    /// A grouped mock only answers while its group is active.
    pub fn get_matching_mocks(&self, request: &MockRequest) -> Vec<&Mock> {
        self.mocks
            .iter()
            .filter(|mock| {
                let group_active = mock
                    .group_id
                    .as_deref()
                    .and_then(|id| self.get_group(id))
                    .map_or(true, |group| group.active);
                mock_matches_request(mock, group_active, request)
            })
            .collect()
    }

    /// Flip a mock's `is_active` flag, returning the new value
    pub fn toggle_mock(&mut self, mock_id: &str) -> Result<bool, StoreError> {
        let mock = self.mock_mut(mock_id)?;
        mock.is_active = !mock.is_active;
        let is_active = mock.is_active;

        debug!(mock_id, is_active, "Mock toggled");
        self.emit_mock(mock_id);
        Ok(is_active)
    }

    /// Flip a group's `active` flag, returning the new value
    pub fn toggle_group(&mut self, group_id: &str) -> Result<bool, StoreError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| StoreError::GroupNotFound {
                group_id: group_id.to_string(),
            })?;
        group.active = !group.active;
        let active = group.active;

        debug!(group_id, active, "Group toggled");
        self.emit_group(group_id);
        Ok(active)
    }

    /// Apply a partial update to a mock and return the updated mock.
    ///
    /// Changing `group_id` moves the mock to the end of the new group's member
    /// list and notifies both affected groups.
    pub fn update_mock(&mut self, mock_id: &str, patch: MockPatch) -> Result<Mock, StoreError> {
        if let Some(url) = &patch.url {
            validate_url(url)?;
        }
        if let Some(Some(group_id)) = &patch.group_id {
            self.ensure_group(group_id)?;
        }

        let mock = self.mock_mut(mock_id)?;
        let old_group = mock.group_id.clone();
        patch.apply(mock);
        let updated = mock.clone();

        debug!(mock_id, group_id = ?updated.group_id, "Mock updated");
        self.emit_mock(mock_id);
        if old_group != updated.group_id {
            self.reassign_membership(mock_id, old_group.as_deref(), updated.group_id.as_deref());
        }
        Ok(updated)
    }

    /// Create a mock with a fresh id and return it.
    pub fn mock_request(&mut self, new_mock: NewMock) -> Result<Mock, StoreError> {
        validate_url(&new_mock.url)?;
        if let Some(group_id) = &new_mock.group_id {
            self.ensure_group(group_id)?;
        }

        let mock = Mock {
            id: Uuid::new_v4().to_string(),
            name: new_mock.name,
            method: new_mock.method,
            url: new_mock.url,
            is_active: new_mock.is_active,
            group_id: new_mock.group_id,
            response: new_mock.response,
        };
        self.mocks.push(mock.clone());

        debug!(mock_id = %mock.id, group_id = ?mock.group_id, "Mock created");
        self.emit_mock(&mock.id);
        if let Some(group_id) = &mock.group_id {
            self.reassign_membership(&mock.id, None, Some(group_id));
        }
        Ok(mock)
    }

    /// Create an empty, active group and return it.
    pub fn add_group(&mut self, new_group: NewGroup) -> Result<Group, StoreError> {
        let name = new_group.name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidGroupName {
                name: new_group.name,
            });
        }

        let group = Group {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            active: true,
            mocks: Vec::new(),
        };
        self.groups.push(group.clone());

        debug!(group_id = %group.id, name = %group.name, "Group created");
        self.emit_group(&group.id);
        Ok(group)
    }

    /// Delete a mock, dropping it from its group's member list.
    pub fn remove_mock(&mut self, mock_id: &str) -> Result<Mock, StoreError> {
        let index = self
            .mocks
            .iter()
            .position(|m| m.id == mock_id)
            .ok_or_else(|| StoreError::MockNotFound {
                mock_id: mock_id.to_string(),
            })?;
        let removed = self.mocks.remove(index);

        debug!(mock_id, "Mock removed");
        self.emit_mock(mock_id);
        if let Some(group_id) = &removed.group_id {
            self.reassign_membership(mock_id, Some(group_id), None);
        }
        Ok(removed)
    }

    /// Register an observer for one kind of change.
    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.observers.subscribe(kind, Box::new(handler))
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn off(&mut self, subscription: SubscriptionId) -> bool {
        self.observers.unsubscribe(subscription)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Overwrite a url without validation, to reach states seeding rejects
    #[cfg(test)]
    pub(crate) fn set_url_unchecked(&mut self, mock_id: &str, url: &str) {
        if let Some(mock) = self.mocks.iter_mut().find(|m| m.id == mock_id) {
            mock.url = url.to_string();
        }
    }

    fn mock_mut(&mut self, mock_id: &str) -> Result<&mut Mock, StoreError> {
        self.mocks
            .iter_mut()
            .find(|m| m.id == mock_id)
            .ok_or_else(|| StoreError::MockNotFound {
                mock_id: mock_id.to_string(),
            })
    }

    fn ensure_group(&self, group_id: &str) -> Result<(), StoreError> {
        if self.get_group(group_id).is_none() {
            return Err(StoreError::GroupNotFound {
                group_id: group_id.to_string(),
            });
        }
        Ok(())
    }

    fn reassign_membership(&mut self, mock_id: &str, from: Option<&str>, to: Option<&str>) {
        if let Some(from) = from {
            if let Some(group) = self.groups.iter_mut().find(|g| g.id == from) {
                group.mocks.retain(|id| id != mock_id);
            }
            self.emit_group(from);
        }
        if let Some(to) = to {
            if let Some(group) = self.groups.iter_mut().find(|g| g.id == to) {
                group.mocks.push(mock_id.to_string());
            }
            self.emit_group(to);
        }
    }

    fn emit_mock(&mut self, mock_id: &str) {
        self.observers.notify(&StoreEvent::UpdateMock {
            mock_id: mock_id.to_string(),
        });
    }

    fn emit_group(&mut self, group_id: &str) {
        self.observers.notify(&StoreEvent::UpdateGroup {
            group_id: group_id.to_string(),
        });
    }
}

/// Reject urls a mock cannot be created with
pub(crate) fn validate_url(url: &str) -> Result<(), StoreError> {
    if url.trim().is_empty() {
        return Err(StoreError::InvalidUrl {
            url: url.to_string(),
        });
    }
    Ok(())
}
