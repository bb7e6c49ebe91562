//! Details panel UI rendering
//!
//! Shows the most recently inspected event: its record fields and the
//! directory entry of the originating device. Only state and
//! delta-state events ever land here; activation of other kinds is a
//! no-op upstream.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::utils::{format_event_time, format_size};
use eframe::egui;
use egui::{Color32, RichText, ScrollArea};
use riet::ThemeColors;

/// Renders the details panel for the last inspected event.
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    if let Some(inspected) = state.selection.inspected() {
        let record = &inspected.record;

        ui.label(RichText::new(format!("Details for event: {}", record.id)).strong());
        ui.separator();

        let available_height = ui.available_height();

        ScrollArea::vertical()
            .id_salt("details_scroll_area")
            .max_height(available_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let record_json = serde_json::json!({
                    "id": record.id,
                    "type": record.kind.code(),
                    "device_id": record.device_id,
                    "size_bytes": record.size_bytes,
                    "time": record.time,
                });
                ui.colored_label(
                    color_mapping::get_kind_color(record.kind, theme_colors),
                    serde_json::to_string(&record_json).unwrap(),
                );

                ui.add_space(10.0);

                ui.label(RichText::new("Event:").strong());
                ui.label(format!("Kind: {}", record.kind));
                ui.label(format!("Captured at: {}", format_event_time(record.time)));
                ui.label(format!("Payload size: {}", format_size(record.size_bytes)));

                ui.add_space(10.0);

                ui.label(RichText::new("Device:").strong());
                match inspected.devices.get(record.device_id) {
                    Some(info) => {
                        let device_json = serde_json::json!({
                            "device_id": info.device_id,
                            "name": info.name,
                            "layout": info.layout,
                        });
                        ui.colored_label(
                            theme_colors.accent,
                            serde_json::to_string(&device_json).unwrap(),
                        );
                    }
                    None => {
                        // Traces may carry events from devices they never declare.
                        ui.colored_label(
                            Color32::GRAY,
                            format!("(device {} not in trace directory)", record.device_id),
                        );
                    }
                }
            });
    } else {
        ui.label("Event details (double-click a state or delta event to inspect)");
    }
}
