//! Text rendering utilities
//!
//! Labels are truncated with ".." when an item box is narrower than its text.

use eframe::egui;

const ELLIPSIS: &str = "..";

/// Truncates text so that `measure(result) <= max_width`, adding ".." if truncated.
///
/// `measure` returns the rendered width of a string. Returns an empty string
/// when not even the ellipsis fits.
pub fn truncate_with(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    if measure(text) <= max_width {
        return text.to_string();
    }

    let available_for_text = max_width - measure(ELLIPSIS);
    if available_for_text <= 0.0 {
        return String::new();
    }

    // Binary search for the longest prefix that fits
    let mut low = 0;
    let mut high = text.chars().count();
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = text.chars().take(mid).collect();
        if measure(&prefix) <= available_for_text {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(low).collect();
    result.push_str(ELLIPSIS);
    result
}

/// Truncates text to fit within a given width using the painter's fonts
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `available_width` - Maximum width available for the text
/// * `font_id` - Font to use for measuring text
/// * `painter` - Painter for text measurement
pub fn truncate_text_to_fit(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    truncate_with(text, available_width, |s| {
        painter
            .layout_no_wrap(s.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_fitting_text_is_unchanged() {
        assert_eq!(truncate_with("Barista", 7.0, chars), "Barista");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_with("Urban Farmer", 8.0, chars), "Urban ..");
        assert_eq!(truncate_with("Café au lait", 5.0, chars), "Caf..");
    }

    #[test]
    fn test_no_room_yields_empty() {
        assert_eq!(truncate_with("Barista", 2.0, chars), "");
        assert_eq!(truncate_with("Barista", 0.0, chars), "");
    }
}
