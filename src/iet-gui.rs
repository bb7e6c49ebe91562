//! IET Event Trace Viewer GUI Application
//!
//! Interactive graphical viewer for captured input-device event traces
//! using the egui framework. The viewer features:
//! - Time-descending event table with on-demand row rendering
//! - Detail inspection of state and delta-state events
//! - Asynchronous file loading with a loading indicator
//! - Multiple theme support with a persistent preference
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - File loading
//! - `presentation/` - Color mapping (separated from domain logic)
//! - `state/` - State management for trace, selection, theme, layout
//! - `ui/` - UI panel rendering and interaction
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod presentation;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the IET
/// event trace viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("IET Event Trace Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "IET Event Trace Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(IetViewerApp::new(cc, initial_file)))),
    )
}

/// The main IET event trace viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, reloads, and row interactions
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct IetViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl IetViewerApp {
    /// Creates a new viewer instance with the theme preference loaded
    /// from persistent storage. Optionally accepts an initial file
    /// path to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        Self {
            state: AppState::with_theme(current_theme_name),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: ui::panel_manager::PanelInteraction, ctx: &egui::Context) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenVirtualTraceRequested => {
                ApplicationCoordinator::open_virtual_trace(&mut self.state, &mut self.loader);
            }
            ui::panel_manager::PanelInteraction::ReloadRequested => {
                ApplicationCoordinator::handle_reload(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::RowSelected(row) => {
                ApplicationCoordinator::handle_row_selected(&mut self.state, row);
            }
            ui::panel_manager::PanelInteraction::RowActivated(row) => {
                ApplicationCoordinator::handle_row_activated(&mut self.state, row);
            }
        }
    }
}

impl eframe::App for IetViewerApp {
    /// Called when the app is being shut down - persists the theme
    /// preference. Table layout is intentionally not persisted.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
    }

    /// Main update loop that renders all UI panels and handles
    /// application state:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for async loading completion
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
