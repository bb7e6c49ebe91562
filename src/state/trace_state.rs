//! Loaded trace and table state management.
//!
//! This module encapsulates all state related to the loaded trace,
//! including the event table built over it, the source file path, and
//! the trace time extent.

use riet::{DeviceDirectory, EventTableModel, TraceFile};
use std::path::PathBuf;
use std::sync::Arc;

/// The event table the GUI renders: a table over a parsed trace file,
/// with the trace's device directory as the activation context for
/// detail views.
pub type LoadedTable = EventTableModel<TraceFile, Arc<DeviceDirectory>>;

/// State related to the loaded trace and its event table.
///
/// Responsibilities:
/// - Owning the event table built over the loaded trace
/// - Tracking the source file path
/// - Maintaining the trace time boundaries
#[derive(Default)]
pub struct TraceState {
    /// Table over the currently loaded trace (if any)
    table: Option<LoadedTable>,
    /// Path to the currently loaded file (None for virtual traces)
    file_path: Option<PathBuf>,
    /// Minimum event timestamp in the trace (seconds)
    min_time: f64,
    /// Maximum event timestamp in the trace (seconds)
    max_time: f64,
}

impl TraceState {
    /// Creates a new trace state with no loaded trace.
    pub fn new() -> Self {
        Self {
            table: None,
            file_path: None,
            min_time: 0.0,
            max_time: 0.0,
        }
    }

    /// Loads a parsed trace and builds the event table over it.
    ///
    /// # Arguments
    /// * `trace` - The parsed trace file
    /// * `path` - Optional file path (None for virtual traces)
    pub fn load_trace(&mut self, trace: TraceFile, path: Option<PathBuf>) {
        let (min, max) = trace.time_extent;
        let context = Arc::clone(&trace.devices);
        self.table = Some(EventTableModel::new(trace, context));
        self.file_path = path;
        self.min_time = min;
        self.max_time = max;
    }

    /// Clears all trace state, resetting to the empty state.
    pub fn clear(&mut self) {
        self.table = None;
        self.file_path = None;
        self.min_time = 0.0;
        self.max_time = 0.0;
    }

    /// Returns a reference to the loaded event table, if any.
    pub fn table(&self) -> Option<&LoadedTable> {
        self.table.as_ref()
    }

    /// Mutable access to the loaded event table, if any.
    pub fn table_mut(&mut self) -> Option<&mut LoadedTable> {
        self.table.as_mut()
    }

    /// Returns the file path of the loaded trace, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Returns the minimum event timestamp in the trace.
    pub fn min_time(&self) -> f64 {
        self.min_time
    }

    /// Returns the maximum event timestamp in the trace.
    pub fn max_time(&self) -> f64 {
        self.max_time
    }
}
