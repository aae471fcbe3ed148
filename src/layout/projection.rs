//! Date to pixel projection.
//!
//! Start dates map to the beginning of their month. End dates map one
//! month earlier than their own month start (clamped at January), so an
//! item ending in March reaches the start of February.

use crate::config::LayoutConfig;
use crate::date::YearMonth;
use crate::record::TimelineRecord;

/// Geometry computed from dates alone, before any text adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedItem<'a> {
    pub record: &'a TimelineRecord,
    /// Pixels from the track origin
    pub offset: f64,
    pub width: f64,
    /// End projection before the minimum width floor is applied
    pub original_end_offset: f64,
}

impl ProjectedItem<'_> {
    pub fn right_edge(&self) -> f64 {
        self.offset + self.width
    }
}

/// Pixel offset of the start of `date`.
pub fn start_offset(date: YearMonth, config: &LayoutConfig) -> f64 {
    let years = (date.year - config.origin_year) as f64;
    years * config.pixels_per_year + date.month0() as f64 * config.pixels_per_month()
}

/// Pixel offset an item ending at `date` extends to.
pub fn end_offset(date: YearMonth, config: &LayoutConfig) -> f64 {
    let years = (date.year - config.origin_year) as f64;
    let months = date.month0().saturating_sub(1);
    years * config.pixels_per_year + months as f64 * config.pixels_per_month()
}

/// Projects one record onto the pixel axis.
pub fn project<'a>(record: &'a TimelineRecord, config: &LayoutConfig) -> ProjectedItem<'a> {
    let offset = start_offset(record.start, config);
    let original_end_offset = end_offset(record.end, config);
    let width = (original_end_offset - offset).max(config.min_width);

    ProjectedItem {
        record,
        offset,
        width,
        original_end_offset,
    }
}

/// Projects every record of a track, preserving input order.
pub fn project_track<'a>(records: &'a [TimelineRecord], config: &LayoutConfig) -> Vec<ProjectedItem<'a>> {
    records.iter().map(|record| project(record, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: (i32, u32), end: (i32, u32)) -> TimelineRecord {
        TimelineRecord::new(
            "Title",
            "Org",
            YearMonth::new(start.0, start.1),
            YearMonth::new(end.0, end.1),
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_reference_projection() {
        let config = LayoutConfig::default();
        let rec = record((2020, 4), (2023, 2));
        let item = project(&rec, &config);

        assert!(approx(item.offset, 100.0));
        assert!(approx(item.original_end_offset, 1233.33));
        assert!(approx(item.width, 1133.33));
    }

    #[test]
    fn test_end_month_is_shifted_back_one_month() {
        let config = LayoutConfig::default();

        // March ends at the start of February
        let march = end_offset(YearMonth::new(2021, 3), &config);
        assert!(approx(march, 400.0 + 33.333));

        // January and February both clamp to the start of the year
        let january = end_offset(YearMonth::new(2021, 1), &config);
        let february = end_offset(YearMonth::new(2021, 2), &config);
        assert!(approx(january, 400.0));
        assert!(approx(february, 400.0));
    }

    #[test]
    fn test_short_item_gets_minimum_width() {
        let config = LayoutConfig::default();
        let rec = record((2025, 4), (2025, 5));
        let item = project(&rec, &config);

        // End projection lands before the start, the floor takes over
        assert!(item.original_end_offset < item.offset + config.min_width);
        assert_eq!(item.width, config.min_width);
    }

    #[test]
    fn test_offset_is_monotonic_in_start_date() {
        let config = LayoutConfig::default();
        let mut previous = f64::NEG_INFINITY;

        for year in 2019..2027 {
            for month in 1..=12 {
                let offset = start_offset(YearMonth::new(year, month), &config);
                assert!(offset > previous);
                previous = offset;
            }
        }
    }

    #[test]
    fn test_dates_before_origin_are_negative() {
        let config = LayoutConfig::default();
        assert!(approx(start_offset(YearMonth::new(2019, 1), &config), -400.0));
    }
}
