//! Notification boundary.
//!
//! Notices are fixed, presentation-only messages. How they reach the user depends on the host:
//! the HTTP surface queues them per screen instance, the CLI prints them, and the default
//! notifier only logs.

use kalp_content::Notice;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Receives notices raised by screens and narration.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(kind = ?notice.kind, "{}: {}", notice.title, notice.message);
    }
}

/// Buffers notices until a client collects them.
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    pending: Arc<Mutex<VecDeque<Notice>>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeQueue {
    fn notify(&self, notice: Notice) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notice);
    }
}
