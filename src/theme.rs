//! Theme support for the IET viewer GUI.
//!
//! Provides color schemes for the event table and detail panels, with
//! built-in Light, Dark, and Dracula themes and a centralized manager.
//! Besides the usual chrome colors, each theme assigns one color per
//! event kind so rows and detail views stay visually consistent.

use egui::Color32;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::record::EventKind;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub error: Color32,

    // Event kind colors
    pub state: Color32,
    pub delta: Color32,
    pub text_input: Color32,
    pub configuration: Color32,
    pub removal: Color32,
}

impl ThemeColors {
    /// Color assigned to an event kind.
    pub fn kind_color(&self, kind: EventKind) -> Color32 {
        match kind {
            EventKind::State => self.state,
            EventKind::Delta => self.delta,
            EventKind::Text => self.text_input,
            EventKind::Configuration => self.configuration,
            EventKind::Removal => self.removal,
        }
    }
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

static BUILTIN_THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![light_theme(), dark_theme(), dracula_theme()]
});

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in BUILTIN_THEMES.iter() {
            themes.insert(theme.name.clone(), theme.clone());
        }
        Self { themes }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(40, 100, 200),
            error: Color32::from_rgb(200, 40, 40),

            state: Color32::from_rgb(40, 160, 40),
            delta: Color32::from_rgb(0, 160, 180),
            text_input: Color32::from_rgb(140, 60, 180),
            configuration: Color32::from_rgb(230, 120, 20),
            removal: Color32::from_rgb(200, 40, 40),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(52, 152, 219),
            error: Color32::from_rgb(231, 76, 60),

            state: Color32::from_rgb(46, 204, 113),
            delta: Color32::from_rgb(26, 188, 156),
            text_input: Color32::from_rgb(155, 89, 182),
            configuration: Color32::from_rgb(243, 156, 18),
            removal: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            accent: hex_to_color32("#8be9fd"),
            error: hex_to_color32("#ff5555"),

            state: hex_to_color32("#50fa7b"),
            delta: hex_to_color32("#8be9fd"),
            text_input: hex_to_color32("#bd93f9"),
            configuration: hex_to_color32("#ffb86c"),
            removal: hex_to_color32("#ff5555"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_listed_sorted() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }

    #[test]
    fn test_get_theme() {
        let manager = ThemeManager::new();
        assert!(manager.get_theme("Dark").is_some());
        assert!(manager.get_theme("Nonexistent").is_none());
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("282a36"), Color32::from_rgb(40, 42, 54));
        assert_eq!(hex_to_color32("bogus"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_every_kind_has_a_color() {
        let theme = dark_theme();
        let kinds = [
            EventKind::State,
            EventKind::Delta,
            EventKind::Text,
            EventKind::Configuration,
            EventKind::Removal,
        ];
        for kind in kinds {
            // Just exercise the mapping; the exact colors are a theme choice.
            let _ = theme.colors.kind_color(kind);
        }
    }
}
