//! Application-level flows: loading traces and handling table
//! interactions.
//!
//! The coordinator owns no state; it mutates `AppState` in response to
//! UI interactions and loader completions.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::InspectedEvent;
use eframe::egui;
use riet::{Activation, RowId};
use std::path::PathBuf;

/// Coordinates file loading, reloads, and row interactions.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a trace file in the background.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_trace_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates and loads a virtual trace synchronously.
    pub fn open_virtual_trace(state: &mut AppState, loader: &mut AsyncLoader) {
        state.reset_trace_state();
        match loader.load_virtual_trace() {
            Ok(trace) => state.trace.load_trace(trace, None),
            Err(msg) => state.error_message = Some(msg),
        }
    }

    /// Checks whether a background load finished and installs the
    /// result.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) {
        match loader.check_completion() {
            LoadResult::Success { trace, path } => {
                state.trace.load_trace(trace, path);
            }
            LoadResult::Error(msg) => {
                state.error_message = Some(format!("Failed to load trace: {}", msg));
            }
            LoadResult::None => {}
        }
    }

    /// Re-snapshots the table from its trace.
    ///
    /// Row identifiers do not survive a reload, so the selection is
    /// cleared along with it.
    pub fn handle_reload(state: &mut AppState) {
        if let Some(table) = state.trace.table_mut() {
            table.reload();
            state.selection.clear();
        }
    }

    /// Handles a single click on a table row.
    pub fn handle_row_selected(state: &mut AppState, row: RowId) {
        state.selection.select_row(row);
    }

    /// Handles a double click on a table row.
    ///
    /// Asks the table model; only `Inspect` results change state —
    /// everything else is a no-op.
    pub fn handle_row_activated(state: &mut AppState, row: RowId) {
        let inspected = match state.trace.table() {
            Some(table) => match table.on_row_activated(row) {
                Activation::Inspect { record, context } => Some(InspectedEvent {
                    record: record.clone(),
                    devices: context,
                }),
                Activation::Ignored => None,
            },
            None => None,
        };

        if let Some(inspected) = inspected {
            state.selection.select_row(row);
            state.selection.set_inspected(inspected);
        }
    }
}
