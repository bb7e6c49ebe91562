//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying trace metadata.

use crate::app::AppState;
use crate::utils::{format_event_time, format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window with trace
/// metadata.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(table) = state.trace.table() {
            ui.label(RichText::new("|").strong());

            let trace = table.trace();
            let time_range = format!(
                "{}..{}",
                format_event_time(state.trace.min_time()),
                format_event_time(state.trace.max_time())
            );

            let source = match state.trace.file_path() {
                Some(path) => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                None => "Virtual Trace".to_string(),
            };

            ui.label(RichText::new(format!(
                "{} | Format: {} | Devices: {} | Events: {} | Time: {}",
                source,
                trace.header.version,
                trace.devices.len(),
                table.row_count(),
                time_range
            )).strong());
        } else {
            ui.label(RichText::new("| No trace loaded").strong());
        }
    });
}
