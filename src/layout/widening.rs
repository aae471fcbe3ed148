//! Text-driven width expansion.
//!
//! Items whose labels do not fit grow to the right. Growth stops one month
//! before the nearest later item in the same track, or a fixed number of
//! months past the item's own end when nothing follows it. Widths never
//! shrink.

use crate::config::LayoutConfig;
use crate::layout::projection::ProjectedItem;
use crate::layout::text_metrics::required_label_width;
use crate::record::TimelineRecord;

/// Geometry after text adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidenedItem<'a> {
    pub record: &'a TimelineRecord,
    pub offset: f64,
    pub width: f64,
    /// Width from date projection alone
    pub projected_width: f64,
    pub original_end_offset: f64,
}

impl WidenedItem<'_> {
    pub fn right_edge(&self) -> f64 {
        self.offset + self.width
    }

    pub fn was_widened(&self) -> bool {
        self.width > self.projected_width
    }
}

/// Nearest sibling that starts strictly after `item` ends.
pub fn next_neighbor<'s, 'a>(
    item: &ProjectedItem<'a>,
    siblings: &'s [ProjectedItem<'a>],
) -> Option<&'s ProjectedItem<'a>> {
    let right_edge = item.right_edge();
    siblings
        .iter()
        .filter(|other| other.offset > right_edge)
        .min_by(|a, b| a.offset.total_cmp(&b.offset))
}

/// Rightmost pixel `item` may extend to.
pub fn growth_ceiling(item: &ProjectedItem, siblings: &[ProjectedItem], config: &LayoutConfig) -> f64 {
    match next_neighbor(item, siblings) {
        Some(next) => next.offset - config.pixels_per_month(),
        None => item.original_end_offset + config.max_extension_months * config.pixels_per_month(),
    }
}

/// Largest width `item` may take; never below its projected width.
pub fn max_allowed_width(item: &ProjectedItem, siblings: &[ProjectedItem], config: &LayoutConfig) -> f64 {
    item.width.max(growth_ceiling(item, siblings, config) - item.offset)
}

/// Widens one item against the projected geometry of its track.
pub fn widen<'a>(item: &ProjectedItem<'a>, siblings: &[ProjectedItem<'a>], config: &LayoutConfig) -> WidenedItem<'a> {
    let required = required_label_width(item.record, config);

    let width = if required > item.width {
        let max_allowed = max_allowed_width(item, siblings, config);
        max_allowed.min(required.max(config.min_comfortable_width))
    } else {
        item.width
    };

    WidenedItem {
        record: item.record,
        offset: item.offset,
        width,
        projected_width: item.width,
        original_end_offset: item.original_end_offset,
    }
}

/// Widens every item of a track. Input order is preserved.
pub fn widen_track<'a>(items: &[ProjectedItem<'a>], config: &LayoutConfig) -> Vec<WidenedItem<'a>> {
    items.iter().map(|item| widen(item, items, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::YearMonth;
    use crate::layout::projection::project_track;

    fn record(title: &str, org: &str, start: (i32, u32), end: (i32, u32)) -> TimelineRecord {
        TimelineRecord::new(title, org, YearMonth::new(start.0, start.1), YearMonth::new(end.0, end.1))
    }

    #[test]
    fn test_wide_item_is_untouched() {
        let config = LayoutConfig::default();
        let records = vec![record("Short", "Org", (2020, 1), (2022, 1))];
        let projected = project_track(&records, &config);
        let widened = widen_track(&projected, &config);

        assert_eq!(widened[0].width, projected[0].width);
        assert!(!widened[0].was_widened());
    }

    #[test]
    fn test_growth_stops_one_month_before_next_item() {
        let config = LayoutConfig::default();
        let ppm = config.pixels_per_month();
        let records = vec![
            record("A very long title that needs room", "Org", (2021, 1), (2021, 3)),
            record("Next", "Org", (2021, 6), (2022, 6)),
        ];
        let projected = project_track(&records, &config);
        let widened = widen_track(&projected, &config);

        let next_offset = projected[1].offset;
        assert!(widened[0].was_widened());
        assert!(widened[0].right_edge() <= next_offset - ppm + 1e-9);
        assert!((widened[0].right_edge() - (next_offset - ppm)).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_neighbor_bounds_growth() {
        let config = LayoutConfig::default();
        let records = vec![
            record("A very long title that needs room", "Org", (2021, 1), (2021, 3)),
            record("Far", "Org", (2023, 1), (2024, 1)),
            record("Near", "Org", (2021, 8), (2022, 1)),
        ];
        let projected = project_track(&records, &config);

        let next = next_neighbor(&projected[0], &projected).unwrap();
        assert_eq!(next.record.title, "Near");

        let ceiling = growth_ceiling(&projected[0], &projected, &config);
        assert!((ceiling - (projected[2].offset - config.pixels_per_month())).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_item_grows_at_most_two_months_past_end() {
        let config = LayoutConfig::default();
        let ppm = config.pixels_per_month();
        let records = vec![record(
            "An extremely long trailing title for the last entry",
            "Org",
            (2025, 9),
            (2025, 12),
        )];
        let projected = project_track(&records, &config);
        let widened = widen_track(&projected, &config);

        let limit = projected[0].original_end_offset + 2.0 * ppm;
        assert!(widened[0].was_widened());
        assert!((widened[0].right_edge() - limit).abs() < 1e-9);
    }

    #[test]
    fn test_short_trailing_item_is_capped_by_extension() {
        let config = LayoutConfig::default();
        let records = vec![record("Web Design", "Coursera", (2025, 4), (2025, 5))];
        let projected = project_track(&records, &config);
        assert_eq!(projected[0].width, 60.0);

        // Wants 120px but may only reach two months past its end
        let widened = widen_track(&projected, &config);
        let expected = 2.0 * config.pixels_per_month();
        assert!((widened[0].width - expected).abs() < 1e-9);
        assert!(widened[0].width < config.min_comfortable_width);
    }

    #[test]
    fn test_width_never_shrinks_when_neighbor_is_close() {
        let config = LayoutConfig::default();
        let records = vec![
            record("A very long title that needs room", "Org", (2021, 1), (2021, 3)),
            record("Next", "Org", (2021, 3), (2022, 6)),
        ];
        let projected = project_track(&records, &config);
        let widened = widen_track(&projected, &config);

        // The ceiling lies left of the current right edge; the width stays
        assert!(growth_ceiling(&projected[0], &projected, &config) < projected[0].right_edge());
        assert_eq!(widened[0].width, projected[0].width);
        assert!(widened.iter().all(|item| item.width >= config.min_width));
    }
}
