//! Event table UI rendering
//!
//! Renders the time-descending event table with on-demand row
//! rendering: only the rows inside the scroll viewport are laid out
//! each frame, so table cost stays flat regardless of trace size.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::state::NUM_COLUMNS;
use crate::ui::table_header;
use crate::utils::format_event_time;
use eframe::egui;
use egui::{Color32, ScrollArea, Sense};
use riet::{RowId, ThemeColors};

const ROW_HEIGHT: f32 = 20.0;

/// Result of event table interactions that need to be handled by the
/// application.
pub enum TablePanelInteraction {
    /// A row was clicked
    RowSelected(RowId),
    /// A row was double-clicked
    RowActivated(RowId),
}

/// Renders the complete event table with header and on-demand rows.
pub fn render_event_table(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<TablePanelInteraction> {
    let table = match state.trace.table() {
        Some(t) => t,
        None => {
            ui.label("No trace loaded");
            return None;
        }
    };

    table_header::render_table_header(ui, &mut state.layout);
    ui.separator();

    let widths = *state.layout.column_widths();
    let selected_row = state.selection.selected_row();
    let devices = table.context();

    let mut interaction: Option<TablePanelInteraction> = None;

    ScrollArea::vertical()
        .id_salt("event_table_scroll")
        .auto_shrink([false, false])
        .show_rows(ui, ROW_HEIGHT, table.visible_row_count(), |ui, row_range| {
            for index in row_range {
                let row_id = index + 1;
                let total_width = widths.iter().sum::<f32>().max(ui.available_width());
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(total_width, ROW_HEIGHT), Sense::click());

                if selected_row == Some(row_id) {
                    ui.painter().rect_filled(rect, 2.0, theme_colors.selection);
                } else if response.hovered() {
                    ui.painter().rect_filled(rect, 2.0, theme_colors.hover);
                }

                // The empty-trace placeholder row is allocated but
                // rendered without contents.
                if let Some(record) = table.record_at(row_id) {
                    let cells: [(String, Color32); NUM_COLUMNS] = [
                        (record.id.to_string(), theme_colors.text),
                        (
                            record.kind.code().to_string(),
                            color_mapping::get_kind_color(record.kind, theme_colors),
                        ),
                        (devices.label(record.device_id), theme_colors.text),
                        (record.size_bytes.to_string(), theme_colors.text),
                        (format_event_time(record.time), theme_colors.text_dim),
                    ];

                    let font_id = egui::FontId::proportional(13.0);
                    let mut x = rect.min.x;
                    for ((text, color), width) in cells.iter().zip(widths) {
                        ui.painter().text(
                            egui::pos2(x + 4.0, rect.center().y),
                            egui::Align2::LEFT_CENTER,
                            text,
                            font_id.clone(),
                            *color,
                        );
                        x += width;
                    }
                }

                if response.double_clicked() {
                    interaction = Some(TablePanelInteraction::RowActivated(row_id));
                } else if response.clicked() {
                    interaction = Some(TablePanelInteraction::RowSelected(row_id));
                }
            }
        });

    interaction
}
