//! Next-tick render scheduling.
//!
//! Store observers run while the store is still dispatching, so they only
//! enqueue a [`RenderRequest`]. The host drains the queue on its next tick.
//! Requests are not coalesced: every notification yields one render.

use crate::store::EventKind;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::trace;

/// One deferred re-render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    /// Notification that caused the request
    pub cause: EventKind,
}

/// Cloneable sending side, held by store observers.
#[derive(Debug, Clone)]
pub struct RenderHandle {
    tx: UnboundedSender<RenderRequest>,
}

impl RenderHandle {
    /// Queue one render for the next tick
    pub fn schedule(&self, cause: EventKind) {
        if self.tx.send(RenderRequest { cause }).is_err() {
            trace!(%cause, "Render request dropped: scheduler is gone");
        }
    }
}

/// Queue of render requests waiting for the next tick.
#[derive(Debug)]
pub struct RenderScheduler {
    tx: UnboundedSender<RenderRequest>,
    rx: UnboundedReceiver<RenderRequest>,
}

impl RenderScheduler {
    /// Create an empty queue
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self { tx, rx }
    }

    /// Sending side for a store observer
    pub fn handle(&self) -> RenderHandle {
        RenderHandle {
            tx: self.tx.clone(),
        }
    }

    /// Take every request queued so far.
    pub fn take_due(&mut self) -> Vec<RenderRequest> {
        let mut due = Vec::new();
        while let Ok(request) = self.rx.try_recv() {
            due.push(request);
        }
        due
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
