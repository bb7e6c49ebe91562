//! Centralized application state for the IET viewer.
//!
//! Composes focused state components that each manage one aspect of
//! the application's state, keeping invariants local and giving the
//! borrow checker independent access paths to each aspect.

use crate::state::{LayoutState, SelectionState, ThemeState, TraceState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded trace and its event table
    pub trace: TraceState,

    /// Selection and inspection state
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state (session-only)
    pub layout: LayoutState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            trace: TraceState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with a specific theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            trace: TraceState::new(),
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::new(),
            error_message: None,
        }
    }

    /// Resets the trace-related state when loading a new trace.
    pub fn reset_trace_state(&mut self) {
        self.trace.clear();
        self.selection.clear();
        self.error_message = None;
    }
}
