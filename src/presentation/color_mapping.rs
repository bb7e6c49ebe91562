//! Color mapping for event rows based on event kinds.

use riet::{EventKind, ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
///
/// # Arguments
/// * `theme_manager` - The theme manager instance
/// * `current_theme_name` - The name of the currently active theme
///
/// # Returns
/// A reference to the theme's colors, or the dark theme colors as fallback
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| {
            // Fallback to dark theme colors
            &theme_manager.get_theme("Dark").unwrap().colors
        })
}

/// Returns the color used for an event's type column and detail view.
pub fn get_kind_color(kind: EventKind, colors: &ThemeColors) -> egui::Color32 {
    colors.kind_color(kind)
}
