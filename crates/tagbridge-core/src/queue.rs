//! The append-only event queue consumed by the tag-management runtime.

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// Process-wide ordered sequence of JSON event records.
///
/// Every push is an unconditional synchronous append. There is no batching,
/// no dedup, and no backpressure; a record that is never drained is simply
/// retained. Clones share the same underlying sequence.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    records: Arc<Mutex<Vec<Value>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: Value) {
        self.records.lock().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Copy of the current records, oldest first.
    pub fn snapshot(&self) -> Vec<Value> {
        self.records.lock().clone()
    }

    /// Hand the accumulated records over to the consuming runtime.
    pub fn drain(&self) -> Vec<Value> {
        std::mem::take(&mut *self.records.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_the_sequence() {
        let queue = EventQueue::new();
        let handle = queue.clone();

        queue.push(json!({"event": "a"}));
        handle.push(json!({"event": "b"}));

        let records = queue.snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["event"], "a");
        assert_eq!(records[1]["event"], "b");
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let queue = EventQueue::new();
        queue.push(json!({"event": "a"}));

        assert_eq!(queue.drain().len(), 1);
        assert!(queue.is_empty());
    }
}
