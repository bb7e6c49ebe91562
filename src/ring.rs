use crate::record::EventRecord;
use crate::traits::EventTrace;
use std::collections::VecDeque;

/// Bounded capture buffer for event records.
///
/// The ring holds a fixed byte budget rather than a fixed event count:
/// each stored record accounts for its `size_bytes`, and recording a
/// new event evicts the oldest stored events until the newcomer fits.
/// An event larger than the entire budget is rejected outright.
///
/// Iteration and snapshots are FIFO (oldest first). The ring is the
/// capture-side `EventTrace` implementation; a capture thread shares
/// it with a table through `Arc<Mutex<EventRing>>`.
pub struct EventRing {
    events: VecDeque<EventRecord>,
    capacity_bytes: usize,
    used_bytes: usize,
}

impl EventRing {
    /// Creates a ring with the given byte budget.
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity_bytes,
            used_bytes: 0,
        }
    }

    /// Appends an event, evicting oldest events as needed.
    ///
    /// Returns `false` (storing nothing) when the event alone exceeds
    /// the ring's whole budget.
    pub fn record(&mut self, event: EventRecord) -> bool {
        let size = event.size_bytes as usize;
        if size > self.capacity_bytes {
            return false;
        }

        while self.used_bytes + size > self.capacity_bytes {
            match self.events.pop_front() {
                Some(evicted) => self.used_bytes -= evicted.size_bytes as usize,
                None => break,
            }
        }

        self.used_bytes += size;
        self.events.push_back(event);
        true
    }

    /// Discards all stored events, keeping the budget.
    pub fn clear(&mut self) {
        self.events.clear();
        self.used_bytes = 0;
    }

    /// Bytes currently accounted for by stored events.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// The ring's byte budget.
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bytes
    }

    /// Iterates stored events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.iter()
    }
}

impl EventTrace for EventRing {
    fn len(&self) -> usize {
        self.events.len()
    }

    fn snapshot(&self) -> Vec<EventRecord> {
        self.events.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventKind;

    fn event(id: u32, size_bytes: u32, time: f64) -> EventRecord {
        EventRecord {
            id,
            kind: EventKind::State,
            device_id: 1,
            size_bytes,
            time,
        }
    }

    #[test]
    fn test_records_within_budget() {
        let mut ring = EventRing::with_capacity(100);
        assert!(ring.record(event(1, 40, 0.1)));
        assert!(ring.record(event(2, 40, 0.2)));

        assert_eq!(ring.len(), 2);
        assert_eq!(ring.used_bytes(), 80);
    }

    #[test]
    fn test_evicts_oldest_to_fit() {
        let mut ring = EventRing::with_capacity(100);
        ring.record(event(1, 40, 0.1));
        ring.record(event(2, 40, 0.2));
        assert!(ring.record(event(3, 40, 0.3)));

        // Event 1 must have been evicted to admit event 3.
        let ids: Vec<u32> = ring.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(ring.used_bytes(), 80);
    }

    #[test]
    fn test_rejects_oversized_event() {
        let mut ring = EventRing::with_capacity(64);
        ring.record(event(1, 32, 0.1));

        assert!(!ring.record(event(2, 128, 0.2)));
        // Rejection leaves existing contents untouched.
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.used_bytes(), 32);
    }

    #[test]
    fn test_snapshot_is_fifo() {
        let mut ring = EventRing::with_capacity(1000);
        for i in 0..5 {
            ring.record(event(i, 10, i as f64 * 0.1));
        }

        let snap = ring.snapshot();
        let ids: Vec<u32> = snap.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_resets_usage() {
        let mut ring = EventRing::with_capacity(100);
        ring.record(event(1, 50, 0.1));
        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.used_bytes(), 0);
        assert!(ring.record(event(2, 100, 0.2)));
    }
}
