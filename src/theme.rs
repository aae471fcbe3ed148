//! Theme support for the timeline viewer
//!
//! Two built-in palettes, Light and Dark, and a manager that toggles between
//! them. Each palette also carries the fill colors of the two tracks.
//!
//! # Examples
//!
//! ```
//! use rtimeline::theme::{ThemeManager, DARK_THEME, LIGHT_THEME};
//!
//! let manager = ThemeManager::new();
//! assert_eq!(manager.toggled_name(LIGHT_THEME), DARK_THEME);
//! let dark = manager.get_theme(DARK_THEME).unwrap();
//! println!("Dark background: {:?}", dark.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::record::TrackKind;

pub const LIGHT_THEME: &str = "Light";
pub const DARK_THEME: &str = "Dark";

/// Color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub track_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub focus: Color32,

    // Timeline item fills
    pub education: Color32,
    pub experience: Color32,
    pub item_text: Color32,

    pub error: Color32,
}

impl ThemeColors {
    /// Fill color for items of a track.
    pub fn track_color(&self, kind: TrackKind) -> Color32 {
        match kind {
            TrackKind::Education => self.education,
            TrackKind::Experience => self.experience,
        }
    }
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Provides access to the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with the built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert(LIGHT_THEME.to_string(), light_theme());
        themes.insert(DARK_THEME.to_string(), dark_theme());

        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to Light for unknown names
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(LIGHT_THEME))
            .expect("built-in Light theme is always registered")
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Name of the theme the dark-mode toggle switches to
    pub fn toggled_name(&self, current: &str) -> &'static str {
        if self.get_theme(current).map(|t| t.dark).unwrap_or(false) {
            LIGHT_THEME
        } else {
            DARK_THEME
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.track_background;
        visuals.faint_bg_color = colors.hover;
        visuals.window_fill = colors.background;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.focus;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

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
        name: LIGHT_THEME.to_string(),
        dark: false,
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            track_background: hex_to_color32("#f0f0f0"),

            text: Color32::from_rgb(30, 30, 30),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            focus: Color32::from_rgb(40, 100, 200),

            education: hex_to_color32("#4a90d9"),
            experience: hex_to_color32("#e07b39"),
            item_text: Color32::from_rgb(255, 255, 255),

            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: DARK_THEME.to_string(),
        dark: true,
        colors: ThemeColors {
            background: Color32::from_rgb(30, 30, 30),
            panel_background: Color32::from_rgb(39, 39, 39),
            track_background: hex_to_color32("#1b1b1b"),

            text: Color32::from_rgb(230, 230, 230),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            focus: Color32::from_rgb(120, 180, 240),

            education: hex_to_color32("#3572b0"),
            experience: hex_to_color32("#b8612b"),
            item_text: Color32::from_rgb(245, 245, 245),

            error: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
