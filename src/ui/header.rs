//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls, reload, and the theme
//! selector.

use crate::app::AppState;
use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Open Trace" button
    OpenFileRequested(PathBuf),
    /// User clicked "Virtual Trace" button
    OpenVirtualTraceRequested,
    /// User clicked "Reload" button
    ReloadRequested,
}

/// Renders the application header with file controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Trace").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Input Event Traces", &["iet", "jsonl", "br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Virtual Trace").clicked() {
            interaction = Some(HeaderInteraction::OpenVirtualTraceRequested);
        }

        if state.trace.table().is_some() {
            ui.separator();

            let reload = ui.button("⟳ Reload");
            if reload.clicked() {
                interaction = Some(HeaderInteraction::ReloadRequested);
            }
            if reload.hovered() {
                reload.on_hover_text(
                    "Re-snapshot the trace; previously shown row positions do not survive a reload"
                );
            }
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(egui::Color32::RED, err);
    }

    interaction
}
