//! The drain loop.

use std::collections::VecDeque;

use crate::event::{dispatch, Event};
use crate::handler::Handler;

/// FIFO of pending events.
///
/// `process` pops each event and hands it to the single dispatch call site.
/// Events are owned by the queue until dispatched and dropped right after.
#[derive(Debug, Default)]
pub struct Pipeline {
    queue: VecDeque<Box<dyn Event>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, event: impl Event) {
        self.queue.push_back(Box::new(event));
    }

    pub fn put_boxed(&mut self, event: Box<dyn Event>) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Dispatch every queued event to `handler`, oldest first.
    /// Returns the number of events dispatched.
    pub fn process(&mut self, handler: &mut dyn Handler) -> usize {
        let mut dispatched = 0;
        while let Some(event) = self.queue.pop_front() {
            dispatch(event.as_ref(), handler);
            dispatched += 1;
        }
        if dispatched > 0 {
            tracing::debug!(dispatched, "Pipeline drained");
        }
        dispatched
    }
}
