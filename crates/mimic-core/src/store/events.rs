//! Store change notifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change a store observer subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    UpdateMock,
    UpdateGroup,
}

impl EventKind {
    /// Wire name of the event kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::UpdateMock => "UPDATE_MOCK",
            EventKind::UpdateGroup => "UPDATE_GROUP",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification emitted after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    UpdateMock { mock_id: String },
    UpdateGroup { group_id: String },
}

impl StoreEvent {
    /// Kind used to route the event to observers
    pub fn kind(&self) -> EventKind {
        match self {
            StoreEvent::UpdateMock { .. } => EventKind::UpdateMock,
            StoreEvent::UpdateGroup { .. } => EventKind::UpdateGroup,
        }
    }
}

/// Handle returned by [`MockCollectionStore::on`](crate::store::MockCollectionStore::on),
/// used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Handler = Box<dyn FnMut(&StoreEvent) + Send>;

struct Observer {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

/// Registered observers, invoked synchronously in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<Observer>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, kind: EventKind, handler: Handler) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push(Observer { id, kind, handler });
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|observer| observer.id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &StoreEvent) {
        let kind = event.kind();
        for observer in self.entries.iter_mut().filter(|o| o.kind == kind) {
            (observer.handler)(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
