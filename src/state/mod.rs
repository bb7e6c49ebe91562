//! State management modules for the IET event viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Trace state (loaded event table, file path, time extent)
//! - Selection state (selected row, last inspection result)
//! - Theme state (theme manager, current theme)
//! - Layout state (column widths, panel split — session-only)

mod trace_state;
mod selection;
mod theme_state;
mod layout_state;

pub use trace_state::{LoadedTable, TraceState};
pub use selection::{InspectedEvent, SelectionState};
pub use theme_state::ThemeState;
pub use layout_state::{LayoutState, NUM_COLUMNS};
