//! User-visible notices raised by sidebar operations.
//!
//! The presentation layer drains the queue and shows each notice without
//! blocking the gesture that raised it.

use serde::Serialize;
use std::collections::VecDeque;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notice>,
}

impl Notifications {
    /// Queue an informational notice
    pub fn info(&mut self, message: impl Into<String>) {
        self.queue.push_back(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    /// Queue an error notice and log it
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!(%message, "Sidebar operation failed");
        self.queue.push_back(Notice {
            level: NoticeLevel::Error,
            message,
        });
    }

    /// Number of pending notices
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no notice is pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and return every pending notice, oldest first
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}
