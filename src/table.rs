//! Time-ordered, row-addressable table over an event trace.
//!
//! The table takes point-in-time snapshots of an externally owned
//! trace and exposes them as rows sorted newest-first, with contiguous
//! 1-based row identifiers. Sorting and identity mapping live here;
//! anything that draws pixels is a separate renderer consuming this
//! model.

use crate::record::EventRecord;
use crate::traits::EventTrace;

/// Table-local row identifier.
///
/// Distinct from an event's own `id` field: row identifiers are
/// positions in the current snapshot and are recomputed on every
/// reload.
pub type RowId = usize;

/// Reserved identifier of the synthetic root row. Never mapped to an
/// event record and never rendered.
pub const ROOT_ROW: RowId = 0;

/// Result of activating a table row (the double-click-equivalent
/// gesture).
///
/// `Inspect` is a request for an external detail view to open; the
/// table itself never opens anything.
#[derive(Debug)]
pub enum Activation<'a, C> {
    /// The row is invalid or its event kind is not inspectable; no
    /// action should be taken.
    Ignored,
    /// The row holds a state or delta-state event; a detail view
    /// should open for it.
    Inspect {
        record: &'a EventRecord,
        context: C,
    },
}

/// Presents a trace's events as a time-descending, row-addressable
/// table.
///
/// The trace source and the activation context are injected at
/// construction. The context is an opaque reference handed through
/// unchanged in `Inspect` results — typically whatever the detail
/// view needs to interpret the event (a device directory, a root
/// control handle).
///
/// Row identifiers are valid only until the next [`reload`]: a trace
/// mutation that is not followed by a reload leaves previously issued
/// identifiers silently pointing at stale rows. Callers holding row
/// ids across a possible mutation must reload first.
///
/// [`reload`]: EventTableModel::reload
pub struct EventTableModel<T, C> {
    trace: T,
    context: C,
    rows: Vec<EventRecord>,
}

impl<T: EventTrace, C: Clone> EventTableModel<T, C> {
    /// Creates a table over the given trace and performs the initial
    /// reload.
    pub fn new(trace: T, context: C) -> Self {
        let mut model = Self {
            trace,
            context,
            rows: Vec::new(),
        };
        model.reload();
        model
    }

    /// Replaces the snapshot with a fresh copy of the trace contents,
    /// sorted by time descending (greatest time first; equal times
    /// keep their snapshot order).
    ///
    /// Invalidates all previously issued row identifiers. Never fails;
    /// an empty trace yields an empty snapshot, which the table still
    /// presents to renderers as a single unmapped placeholder row (see
    /// [`visible_row_count`]).
    ///
    /// [`visible_row_count`]: EventTableModel::visible_row_count
    pub fn reload(&mut self) {
        let mut rows = self.trace.snapshot();
        rows.sort_by(|a, b| b.time.total_cmp(&a.time));
        self.rows = rows;
    }

    /// Number of renderable data rows (0 when only the placeholder
    /// exists).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows a renderer should draw: `row_count`, or 1 for
    /// the blank placeholder when the snapshot is empty. Keeps the
    /// table non-degenerate for renderers that disallow zero-row
    /// trees.
    pub fn visible_row_count(&self) -> usize {
        self.rows.len().max(1)
    }

    /// Looks up the record behind a 1-based row identifier from the
    /// current snapshot.
    ///
    /// Returns `None` for the root row (0), the empty-trace
    /// placeholder, and any identifier beyond the current bounds —
    /// the sole error condition of this table, expressed as a value.
    pub fn record_at(&self, row: RowId) -> Option<&EventRecord> {
        if row == ROOT_ROW {
            return None;
        }
        self.rows.get(row - 1)
    }

    /// Handles the double-click-equivalent gesture on a row.
    ///
    /// Only state and delta-state events are inspectable; activation
    /// of any other row — including invalid identifiers, which are a
    /// no-op by design — yields [`Activation::Ignored`].
    pub fn on_row_activated(&self, row: RowId) -> Activation<'_, C> {
        match self.record_at(row) {
            Some(record) if record.kind.is_inspectable() => Activation::Inspect {
                record,
                context: self.context.clone(),
            },
            _ => Activation::Ignored,
        }
    }

    /// The trace source this table reads.
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Mutable access to the trace source, for owners of live buffers.
    /// Mutating the trace invalidates row identifiers once the next
    /// reload happens; until then the snapshot keeps serving the old
    /// contents.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// The activation context injected at construction.
    pub fn context(&self) -> &C {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventKind;
    use crate::ring::EventRing;

    fn event(id: u32, kind: EventKind, time: f64) -> EventRecord {
        EventRecord {
            id,
            kind,
            device_id: 1,
            size_bytes: 16,
            time,
        }
    }

    fn three_event_table() -> EventTableModel<Vec<EventRecord>, &'static str> {
        let trace = vec![
            event(1, EventKind::State, 0.5),
            event(2, EventKind::Delta, 1.2),
            event(3, EventKind::Text, 0.8),
        ];
        EventTableModel::new(trace, "root")
    }

    #[test]
    fn test_rows_sorted_time_descending() {
        let table = three_event_table();

        assert_eq!(table.row_count(), 3);
        // Times 1.2, 0.8, 0.5 descending → event ids 2, 3, 1.
        let ids: Vec<u32> = (1..=3).map(|r| table.record_at(r).unwrap().id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        for row in 1..table.row_count() {
            let earlier = table.record_at(row).unwrap().time;
            let later = table.record_at(row + 1).unwrap().time;
            assert!(earlier >= later);
        }
    }

    #[test]
    fn test_row_ids_are_contiguous() {
        let table = three_event_table();

        for row in 1..=table.row_count() {
            assert!(table.record_at(row).is_some());
        }
        assert!(table.record_at(ROOT_ROW).is_none());
        assert!(table.record_at(table.row_count() + 1).is_none());
    }

    #[test]
    fn test_record_at_idempotent_between_reloads() {
        let table = three_event_table();

        let first = table.record_at(2).unwrap().clone();
        let second = table.record_at(2).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_activation_of_inspectable_rows() {
        let table = three_event_table();

        // Row 1 is the Delta event with id 2.
        match table.on_row_activated(1) {
            Activation::Inspect { record, context } => {
                assert_eq!(record.id, 2);
                assert_eq!(record.kind, EventKind::Delta);
                assert_eq!(context, "root");
            }
            Activation::Ignored => panic!("delta-state row must be inspectable"),
        }

        // Row 3 is the State event with id 1.
        assert!(matches!(
            table.on_row_activated(3),
            Activation::Inspect { record, .. } if record.id == 1
        ));
    }

    #[test]
    fn test_activation_of_non_inspectable_row_is_ignored() {
        let table = three_event_table();

        // Row 2 is the Text event with id 3.
        assert!(matches!(table.on_row_activated(2), Activation::Ignored));
    }

    #[test]
    fn test_activation_of_invalid_row_is_ignored() {
        let table = three_event_table();

        assert!(matches!(table.on_row_activated(ROOT_ROW), Activation::Ignored));
        assert!(matches!(table.on_row_activated(17), Activation::Ignored));
    }

    #[test]
    fn test_empty_trace_presents_placeholder() {
        let table: EventTableModel<Vec<EventRecord>, ()> = EventTableModel::new(Vec::new(), ());

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.visible_row_count(), 1);
        assert!(table.record_at(ROOT_ROW).is_none());
        assert!(table.record_at(1).is_none());
        assert!(matches!(table.on_row_activated(1), Activation::Ignored));
    }

    #[test]
    fn test_equal_times_keep_snapshot_order() {
        let trace = vec![
            event(10, EventKind::State, 1.0),
            event(11, EventKind::State, 1.0),
            event(12, EventKind::State, 1.0),
        ];
        let table = EventTableModel::new(trace, ());

        let ids: Vec<u32> = (1..=3).map(|r| table.record_at(r).unwrap().id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_mutation_requires_reload() {
        let mut ring = EventRing::with_capacity(1024);
        ring.record(event(1, EventKind::State, 0.5));
        let mut table = EventTableModel::new(ring, ());
        assert_eq!(table.row_count(), 1);

        // The snapshot keeps serving the old contents until a reload.
        table.trace_mut().record(event(2, EventKind::Delta, 1.5));
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.record_at(1).unwrap().id, 1);

        table.reload();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.record_at(1).unwrap().id, 2);
        assert_eq!(table.record_at(2).unwrap().id, 1);
    }

    #[test]
    fn test_snapshot_ignores_source_order() {
        // Stored order is not time order; reload must sort regardless.
        let trace = vec![
            event(1, EventKind::State, 3.0),
            event(2, EventKind::State, 1.0),
            event(3, EventKind::State, 2.0),
        ];
        let table = EventTableModel::new(trace, ());

        let times: Vec<f64> = (1..=3).map(|r| table.record_at(r).unwrap().time).collect();
        assert_eq!(times, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_shared_ring_through_mutex() {
        use std::sync::{Arc, Mutex};

        let shared = Arc::new(Mutex::new(EventRing::with_capacity(1024)));
        shared.lock().unwrap().record(event(1, EventKind::State, 0.1));

        let mut table = EventTableModel::new(Arc::clone(&shared), ());
        assert_eq!(table.row_count(), 1);

        // A "capture thread" appends through its own handle.
        shared.lock().unwrap().record(event(2, EventKind::Delta, 0.2));
        table.reload();
        assert_eq!(table.row_count(), 2);
    }
}
