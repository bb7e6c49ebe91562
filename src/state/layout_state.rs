//! UI layout state management.
//!
//! Column widths and the details split are session-only; they are
//! deliberately not persisted across runs.

/// Number of columns in the event table: Id, Type, Device, Size, Time.
pub const NUM_COLUMNS: usize = 5;

/// Default column widths in points, matching the column order above.
const DEFAULT_COLUMN_WIDTHS: [f32; NUM_COLUMNS] = [80.0, 60.0, 80.0, 50.0, 100.0];

/// State related to panel layout and table columns.
pub struct LayoutState {
    /// Width of each event table column
    column_widths: [f32; NUM_COLUMNS],
    /// Fraction of the window height given to the table (the rest is
    /// the details panel)
    split_ratio: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default dimensions.
    pub fn new() -> Self {
        Self {
            column_widths: DEFAULT_COLUMN_WIDTHS,
            split_ratio: 0.7,
        }
    }

    /// Returns the current column widths.
    pub fn column_widths(&self) -> &[f32; NUM_COLUMNS] {
        &self.column_widths
    }

    /// Mutable access to the column widths (for header resize drags).
    pub fn column_widths_mut(&mut self) -> &mut [f32; NUM_COLUMNS] {
        &mut self.column_widths
    }

    /// Returns the table/details split ratio.
    pub fn split_ratio(&self) -> f32 {
        self.split_ratio
    }
}
