//! Drag and drop of mocks between groups and the sidebar surface.
//!
//! Drop targets nest: a group sits inside the sidebar. A drop is offered to
//! targets from the innermost outwards and the first one that accepts it
//! claims it, so the sidebar never ungroups a mock a group just took.

use crate::error::StoreError;
use crate::store::MockCollectionStore;
use crate::types::group::GroupId;
use crate::types::mock::{MockId, MockPatch};
use tracing::{debug, trace};

/// Payload of a drag: only the id of the dragged mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    pub id: MockId,
}

impl DragItem {
    /// Drag payload for the given mock
    pub fn new(id: impl Into<MockId>) -> Self {
        Self { id: id.into() }
    }
}

/// Identity of a drop target, used for hover tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTargetId {
    Sidebar,
    Group(GroupId),
}

/// Result of a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The mock left its group
    Ungrouped { mock_id: MockId },
    /// The mock joined a group
    Regrouped { mock_id: MockId, group_id: GroupId },
    /// A target claimed the drop without changing anything
    Unchanged { mock_id: MockId },
    /// The dragged mock no longer exists; nothing was changed
    Mismatch { mock_id: MockId },
    /// No target handled the drop, or there was no drag in progress
    Unhandled,
}

/// Drag state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragItem),
    Resolved(DropOutcome),
}

/// A region that can take a dropped mock.
pub trait DropTarget {
    fn id(&self) -> DropTargetId;

    fn can_accept(&self, _item: &DragItem, _store: &MockCollectionStore) -> bool {
        true
    }

    fn on_drop(
        &self,
        item: &DragItem,
        store: &mut MockCollectionStore,
    ) -> Result<DropOutcome, StoreError>;
}

/// The sidebar surface: dropping a mock here takes it out of its group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarDropTarget;

impl DropTarget for SidebarDropTarget {
    fn id(&self) -> DropTargetId {
        DropTargetId::Sidebar
    }

    fn on_drop(
        &self,
        item: &DragItem,
        store: &mut MockCollectionStore,
    ) -> Result<DropOutcome, StoreError> {
        let Some(mock) = store.get_mock(&item.id) else {
            return Ok(DropOutcome::Mismatch {
                mock_id: item.id.clone(),
            });
        };
        let was_grouped = mock.group_id.is_some();

        // ungrouping an ungrouped mock still goes through the store and notifies
        store.update_mock(&item.id, MockPatch::ungroup())?;
        if was_grouped {
            Ok(DropOutcome::Ungrouped {
                mock_id: item.id.clone(),
            })
        } else {
            Ok(DropOutcome::Unchanged {
                mock_id: item.id.clone(),
            })
        }
    }
}

/// A group header: dropping a mock here moves it into the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDropTarget {
    pub group_id: GroupId,
}

impl GroupDropTarget {
    /// Drop target for the given group header
    pub fn new(group_id: impl Into<GroupId>) -> Self {
        Self {
            group_id: group_id.into(),
        }
    }
}

impl DropTarget for GroupDropTarget {
    fn id(&self) -> DropTargetId {
        DropTargetId::Group(self.group_id.clone())
    }

    fn can_accept(&self, _item: &DragItem, store: &MockCollectionStore) -> bool {
        store.get_group(&self.group_id).is_some()
    }

    fn on_drop(
        &self,
        item: &DragItem,
        store: &mut MockCollectionStore,
    ) -> Result<DropOutcome, StoreError> {
        let Some(mock) = store.get_mock(&item.id) else {
            return Ok(DropOutcome::Mismatch {
                mock_id: item.id.clone(),
            });
        };
        if mock.group_id.as_deref() == Some(self.group_id.as_str()) {
            return Ok(DropOutcome::Unchanged {
                mock_id: item.id.clone(),
            });
        }

        store.update_mock(&item.id, MockPatch::assign_group(self.group_id.clone()))?;
        Ok(DropOutcome::Regrouped {
            mock_id: item.id.clone(),
            group_id: self.group_id.clone(),
        })
    }
}

/// Tracks the drag in progress and dispatches drops to nested targets.
#[derive(Debug, Clone, Default)]
pub struct DragDropCoordinator {
    state: DragState,
    hovered: Option<DropTargetId>,
}

impl DragDropCoordinator {
    /// Create an idle coordinator
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if a mock is being dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start dragging a mock. A previous drag, if any, is abandoned.
    pub fn begin_drag(&mut self, mock_id: impl Into<MockId>) {
        let item = DragItem::new(mock_id);
        debug!(mock_id = %item.id, "Drag started");
        self.state = DragState::Dragging(item);
        self.hovered = None;
    }

    /// Record the target under the pointer. Styling only.
    pub fn hover(&mut self, target: Option<DropTargetId>) {
        if self.is_dragging() {
            self.hovered = target;
        }
    }

    /// Check if the pointer is over a target
    pub fn is_over(&self, target: &DropTargetId) -> bool {
        self.hovered.as_ref() == Some(target)
    }

    /// Abandon the drag without dropping
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.hovered = None;
    }

    /// Drop the dragged mock onto a chain of targets, innermost first.
    ///
    /// Once a target has handled the drop, outer targets are not asked.
    /// Dropping with no drag in progress does nothing.
    pub fn drop_on(
        &mut self,
        store: &mut MockCollectionStore,
        targets: &[&dyn DropTarget],
    ) -> Result<DropOutcome, StoreError> {
        let DragState::Dragging(item) = &self.state else {
            trace!("Drop ignored: no drag in progress");
            return Ok(DropOutcome::Unhandled);
        };
        let item = item.clone();
        self.hovered = None;

        let mut did_drop = false;
        let mut outcome = DropOutcome::Unhandled;
        for target in targets {
            if did_drop {
                trace!(drop_target = ?target.id(), "Drop already handled by a nested target");
                continue;
            }
            if !target.can_accept(&item, store) {
                continue;
            }
            outcome = match target.on_drop(&item, store) {
                Ok(outcome) => outcome,
                Err(err) => {
                    self.state = DragState::Idle;
                    return Err(err);
                }
            };
            did_drop = true;
        }

        debug!(mock_id = %item.id, ?outcome, "Drop resolved");
        self.state = DragState::Resolved(outcome.clone());
        Ok(outcome)
    }
}
