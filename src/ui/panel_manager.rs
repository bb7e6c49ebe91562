//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, event table, details, status)
//! and manages their layout and interaction routing.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::ui::{details_panel, event_table_panel, header, status_bar};
use riet::RowId;

/// Result of panel interactions that need to be handled by the
/// application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested to open a virtual trace
    OpenVirtualTraceRequested,
    /// User requested a table reload
    ReloadRequested,
    /// A table row was clicked
    RowSelected(RowId),
    /// A table row was double-clicked
    RowActivated(RowId),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI,
    /// called from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenVirtualTraceRequested => {
                        PanelInteraction::OpenVirtualTraceRequested
                    }
                    header::HeaderInteraction::ReloadRequested => {
                        PanelInteraction::ReloadRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Details panel above status panel
        egui::TopBottomPanel::bottom("details_panel")
            .default_height(ctx.content_rect().height() * (1.0 - state.layout.split_ratio()))
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    details_panel::render_details_panel(ui, state, &theme_colors);
                });
            });

        // Central panel: event table
        let table_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(table_frame)
            .show(ctx, |ui| {
                ui.heading("Captured Events");
                ui.separator();

                if loader.is_loading() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading trace…");
                    });
                    return;
                }

                if let Some(table_interaction) =
                    event_table_panel::render_event_table(ui, state, &theme_colors)
                {
                    interaction = Some(match table_interaction {
                        event_table_panel::TablePanelInteraction::RowSelected(row) => {
                            PanelInteraction::RowSelected(row)
                        }
                        event_table_panel::TablePanelInteraction::RowActivated(row) => {
                            PanelInteraction::RowActivated(row)
                        }
                    });
                }
            });

        interaction
    }
}
