//! The reply queue shared between callbacks and the writer thread.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

use crate::event::Message;

/// Multi-producer, single-consumer queue of outbound replies.
///
/// Callbacks (on the reader thread or detached workers) push; the writer
/// thread pops, blocking on the condition variable while empty. Replies
/// drain in submission order.
#[derive(Default)]
pub(crate) struct ReplyQueue {
    inner: Mutex<Inner>,
    available: Condvar,
}

#[derive(Default)]
struct Inner {
    replies: VecDeque<Message>,
    closed: bool,
}

impl ReplyQueue {
    pub fn new() -> ReplyQueue {
        ReplyQueue::default()
    }

    /// Append a reply and wake the writer. Pushes after `close` are
    /// discarded.
    pub fn push(&self, message: Message) {
        let mut inner = self.lock();
        if inner.closed {
            return;
        }
        inner.replies.push_back(message);
        drop(inner);
        self.available.notify_one();
    }

    /// Remove the oldest reply, blocking while the queue is empty. Returns
    /// `None` once the queue is closed and drained.
    pub fn pop(&self) -> Option<Message> {
        let mut inner = self.lock();
        loop {
            if let Some(message) = inner.replies.pop_front() {
                return Some(message);
            }
            if inner.closed {
                return None;
            }
            inner = self
                .available
                .wait(inner)
                .unwrap_or_else(|err| err.into_inner());
        }
    }

    /// Mark the queue closed and wake all waiters.
    pub fn close(&self) {
        self.lock().closed = true;
        self.available.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A worker that panicked mid-callback must not wedge the writer.
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }
}
