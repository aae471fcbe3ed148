//! Canvas operations for mapping layout pixels onto the screen.
//!
//! This module provides pure functions for:
//! - Computing the horizontal span the timeline canvas must cover
//! - Converting layout offsets to screen X coordinates
//! - Listing year tick positions for the time axis
//!
//! These functions are stateless and can be tested independently.

use rtimeline::{LayoutConfig, TimelineLayout};

/// Blank space kept on both sides of the timeline content.
pub const CANVAS_PADDING: f32 = 24.0;

/// Horizontal span of the timeline in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpan {
    /// Layout offset drawn at the left edge of the content
    pub start_offset: f64,
    /// Layout offset drawn at the right edge of the content
    pub end_offset: f64,
}

impl CanvasSpan {
    /// Span covering every item of both tracks, snapped outward to whole years.
    ///
    /// The origin year is always included, so an empty layout still shows
    /// one year of axis.
    pub fn from_layout(layout: &TimelineLayout, config: &LayoutConfig) -> Self {
        let items = layout.tracks().into_iter().flat_map(|track| track.items.iter());

        let (min, max) = items.fold((0.0_f64, config.pixels_per_year), |(min, max), item| {
            (min.min(item.offset), max.max(item.right_edge()))
        });

        let ppy = config.pixels_per_year;
        Self {
            start_offset: (min / ppy).floor() * ppy,
            end_offset: (max / ppy).ceil() * ppy,
        }
    }

    /// Content width in screen pixels, padding included.
    pub fn width(&self) -> f32 {
        (self.end_offset - self.start_offset) as f32 + 2.0 * CANVAS_PADDING
    }

    /// Converts a layout offset to an X coordinate on a canvas starting at `canvas_left`.
    pub fn offset_to_x(&self, offset: f64, canvas_left: f32) -> f32 {
        canvas_left + CANVAS_PADDING + (offset - self.start_offset) as f32
    }
}

/// Year boundaries within the span, as `(year, offset)` pairs.
pub fn year_ticks(span: &CanvasSpan, config: &LayoutConfig) -> Vec<(i32, f64)> {
    let ppy = config.pixels_per_year;
    let first = (span.start_offset / ppy).round() as i32;
    let last = (span.end_offset / ppy).round() as i32;

    (first..=last)
        .map(|n| (config.origin_year + n, n as f64 * ppy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtimeline::{LayoutEngine, TimelineData, TimelineRecord, YearMonth};

    fn layout_of(records: Vec<TimelineRecord>) -> TimelineLayout {
        let mut data = TimelineData::new();
        data.experience = records;
        LayoutEngine::default().layout(&data)
    }

    #[test]
    fn test_empty_layout_spans_origin_year() {
        let config = LayoutConfig::default();
        let span = CanvasSpan::from_layout(&layout_of(Vec::new()), &config);

        assert_eq!(span.start_offset, 0.0);
        assert_eq!(span.end_offset, 400.0);
        assert_eq!(year_ticks(&span, &config), vec![(2020, 0.0), (2021, 400.0)]);
    }

    #[test]
    fn test_span_snaps_to_years_and_includes_early_items() {
        let config = LayoutConfig::default();
        let layout = layout_of(vec![TimelineRecord::new(
            "Early",
            "Org",
            YearMonth::new(2019, 6),
            YearMonth::new(2021, 3),
        )]);
        let span = CanvasSpan::from_layout(&layout, &config);

        assert_eq!(span.start_offset, -400.0);
        assert_eq!(span.end_offset, 800.0);

        let years: Vec<i32> = year_ticks(&span, &config).into_iter().map(|(y, _)| y).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022]);
    }

    #[test]
    fn test_offset_to_x() {
        let span = CanvasSpan { start_offset: -400.0, end_offset: 800.0 };
        assert_eq!(span.offset_to_x(-400.0, 10.0), 10.0 + CANVAS_PADDING);
        assert_eq!(span.offset_to_x(0.0, 0.0), 400.0 + CANVAS_PADDING);
        assert_eq!(span.width(), 1200.0 + 2.0 * CANVAS_PADDING);
    }
}
