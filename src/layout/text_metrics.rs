//! Label width estimation.
//!
//! Uses a fixed average character width instead of real font metrics so the
//! layout stays independent of any rendering backend.

use crate::config::LayoutConfig;
use crate::record::TimelineRecord;

/// Average character width relative to the font size.
pub const DEFAULT_CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Estimates the rendered width of `text` at `font_size`.
pub fn estimate_text_width(text: &str, font_size: f64, char_width_factor: f64) -> f64 {
    text.chars().count() as f64 * font_size * char_width_factor
}

/// Width a record's box needs to show its title and organization, padding included.
pub fn required_label_width(record: &TimelineRecord, config: &LayoutConfig) -> f64 {
    let title = estimate_text_width(&record.title, config.title_font_size, config.char_width_factor);
    let organization = estimate_text_width(
        &record.organization,
        config.organization_font_size,
        config.char_width_factor,
    );
    title.max(organization) + config.label_padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::YearMonth;

    #[test]
    fn test_estimate_text_width() {
        assert!((estimate_text_width("Barista", 11.0, DEFAULT_CHAR_WIDTH_FACTOR) - 46.2).abs() < 1e-9);
        assert_eq!(estimate_text_width("", 11.0, DEFAULT_CHAR_WIDTH_FACTOR), 0.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let cafe = estimate_text_width("Café", 10.0, DEFAULT_CHAR_WIDTH_FACTOR);
        assert!((cafe - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_required_width_uses_wider_label() {
        let config = LayoutConfig::default();
        let record = TimelineRecord::new(
            "Web Design",
            "Coursera - University of Michigan",
            YearMonth::new(2025, 4),
            YearMonth::new(2025, 7),
        );

        // 33 chars * 10 * 0.6 = 198, wider than the 10 char title at 11px
        let required = required_label_width(&record, &config);
        assert!((required - 222.0).abs() < 1e-9);
    }
}
