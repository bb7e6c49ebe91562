//! Selection and inspection state management.
//!
//! This module encapsulates all state related to user selection in the
//! event table and the most recent inspection request.

use riet::{DeviceDirectory, EventRecord, RowId};
use std::sync::Arc;

/// A materialized `Inspect` activation result: the record plus the
/// device directory the detail view resolves it against.
#[derive(Clone, Debug)]
pub struct InspectedEvent {
    pub record: EventRecord,
    pub devices: Arc<DeviceDirectory>,
}

/// State related to user selection and the open detail view.
///
/// Row identifiers are only valid against the table snapshot they came
/// from, so the selection must be cleared whenever the table reloads.
#[derive(Default)]
pub struct SelectionState {
    /// Currently selected row, if any
    selected_row: Option<RowId>,
    /// The last activated inspectable event, shown in the details panel
    inspected: Option<InspectedEvent>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            selected_row: None,
            inspected: None,
        }
    }

    /// Clears all selection and inspection state.
    pub fn clear(&mut self) {
        self.selected_row = None;
        self.inspected = None;
    }

    // ===== Queries =====

    /// Returns the currently selected row, if any.
    pub fn selected_row(&self) -> Option<RowId> {
        self.selected_row
    }

    /// Returns the last inspected event, if any.
    pub fn inspected(&self) -> Option<&InspectedEvent> {
        self.inspected.as_ref()
    }

    // ===== Mutations =====

    /// Selects a row.
    pub fn select_row(&mut self, row: RowId) {
        self.selected_row = Some(row);
    }

    /// Records an inspection request for the details panel.
    pub fn set_inspected(&mut self, inspected: InspectedEvent) {
        self.inspected = Some(inspected);
    }
}
