//! Color mapping for timeline items.
//!
//! Items are colored by track. Hover brightens the fill; keyboard focus adds
//! an outline in the theme's focus color.

use egui::{Color32, Stroke};
use rtimeline::{adjust_brightness, ThemeColors, TrackKind};

const HOVER_BRIGHTNESS: f32 = 1.2;

/// Fill color of an item box.
///
/// # Arguments
/// * `kind` - Track the item belongs to
/// * `hovered` - Whether the pointer is over the item
/// * `colors` - The current theme's color palette
pub fn item_fill(kind: TrackKind, hovered: bool, colors: &ThemeColors) -> Color32 {
    let base = colors.track_color(kind);
    if hovered {
        adjust_brightness(base, HOVER_BRIGHTNESS)
    } else {
        base
    }
}

/// Outline of an item box, if it has one.
pub fn item_outline(focused: bool, colors: &ThemeColors) -> Option<Stroke> {
    focused.then(|| Stroke::new(2.0, colors.focus))
}

/// Color of the secondary (organization) line inside an item.
pub fn secondary_text(colors: &ThemeColors) -> Color32 {
    colors.item_text.gamma_multiply(0.85)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtimeline::theme::LIGHT_THEME;
    use rtimeline::ThemeManager;

    #[test]
    fn test_fill_follows_track() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default(LIGHT_THEME).colors;

        assert_eq!(item_fill(TrackKind::Education, false, colors), colors.education);
        assert_eq!(item_fill(TrackKind::Experience, false, colors), colors.experience);
        assert_ne!(item_fill(TrackKind::Education, true, colors), colors.education);
    }

    #[test]
    fn test_outline_only_when_focused() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default(LIGHT_THEME).colors;

        assert!(item_outline(false, colors).is_none());
        assert_eq!(item_outline(true, colors).map(|s| s.color), Some(colors.focus));
    }
}
