use crate::record::EventRecord;
use std::sync::{Arc, Mutex};

/// Trait for the externally owned event collection a table reads.
///
/// The table never mutates the source; it only takes point-in-time
/// copies. `snapshot` must return an atomic copy of the current
/// contents — for sources shared with a concurrent capture thread,
/// wrap them in `Arc<Mutex<_>>` and the blanket impl below provides
/// that guarantee.
pub trait EventTrace {
    /// Number of events currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a point-in-time copy of the trace contents, in stored
    /// order.
    fn snapshot(&self) -> Vec<EventRecord>;
}

impl EventTrace for Vec<EventRecord> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn snapshot(&self) -> Vec<EventRecord> {
        self.clone()
    }
}

impl<T: EventTrace> EventTrace for Arc<Mutex<T>> {
    fn len(&self) -> usize {
        self.lock().expect("event trace lock poisoned").len()
    }

    fn snapshot(&self) -> Vec<EventRecord> {
        self.lock().expect("event trace lock poisoned").snapshot()
    }
}

/// Trait for producing a parsed trace, whether read from disk or
/// synthesized in memory.
pub trait TraceReader {
    /// Opens and parses a trace, returning the in-memory form.
    fn read(&self, file_path: &str) -> anyhow::Result<crate::reader::TraceFile>;
}
