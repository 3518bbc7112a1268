//! Cancellation handle for frame-driven tasks.
//!
//! A task that reschedules itself every frame holds one clone of a
//! [`TaskHandle`]; whoever started it keeps another. Cancelling from either
//! side is observed at the next frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::Relaxed) {
            log::debug!("Task cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_shared_between_clones() {
        let handle = TaskHandle::new();
        let task_side = handle.clone();
        assert!(!task_side.is_cancelled());
        handle.cancel();
        assert!(task_side.is_cancelled());
        // idempotent
        handle.cancel();
        assert!(handle.is_cancelled());
    }
}
