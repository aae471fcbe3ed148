//! Overlap detection and sub-row assignment.
//!
//! Items are colored greedily in input order: each goes into the first
//! sub-row holding nothing it overlaps. Items that overlap nothing get the
//! full track height whatever sub-row they landed in.

use crate::config::LayoutConfig;
use crate::layout::widening::WidenedItem;

/// Half-open interval intersection; touching endpoints do not overlap.
pub fn intervals_overlap(a_offset: f64, a_width: f64, b_offset: f64, b_width: f64) -> bool {
    let a_right = a_offset + a_width;
    let b_right = b_offset + b_width;
    !(a_right <= b_offset || a_offset >= b_right)
}

pub fn items_overlap(a: &WidenedItem, b: &WidenedItem) -> bool {
    intervals_overlap(a.offset, a.width, b.offset, b.width)
}

/// Result of first-fit coloring for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRowAssignment {
    /// Sub-row per item, parallel to the input
    pub sub_rows: Vec<usize>,
    /// Item indices per sub-row
    pub rows: Vec<Vec<usize>>,
}

impl SubRowAssignment {
    pub fn sub_row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Assigns every item to the first sub-row where it overlaps no occupant.
pub fn assign_sub_rows(items: &[WidenedItem]) -> SubRowAssignment {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut sub_rows = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let free_row = rows.iter().position(|row| {
            row.iter().all(|&occupant| !items_overlap(item, &items[occupant]))
        });

        match free_row {
            Some(row) => {
                rows[row].push(index);
                sub_rows.push(row);
            }
            None => {
                rows.push(vec![index]);
                sub_rows.push(rows.len() - 1);
            }
        }
    }

    SubRowAssignment { sub_rows, rows }
}

/// Whether the item at `index` overlaps any other item of the track.
pub fn has_overlap(items: &[WidenedItem], index: usize) -> bool {
    let item = &items[index];
    items
        .iter()
        .enumerate()
        .any(|(other_index, other)| other_index != index && items_overlap(item, other))
}

/// Vertical placement of one item: `(top, height)`.
pub fn vertical_extent(sub_row: usize, overlapping: bool, config: &LayoutConfig) -> (f64, f64) {
    if overlapping {
        let top = sub_row as f64 * (config.compact_height + config.sub_row_spacing) + config.top_margin;
        (top, config.compact_height)
    } else {
        (config.top_margin, config.full_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::YearMonth;
    use crate::record::TimelineRecord;

    fn widened(record: &TimelineRecord, offset: f64, width: f64) -> WidenedItem<'_> {
        WidenedItem {
            record,
            offset,
            width,
            projected_width: width,
            original_end_offset: offset + width,
        }
    }

    fn dummy() -> TimelineRecord {
        TimelineRecord::new("T", "O", YearMonth::new(2020, 1), YearMonth::new(2020, 2))
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        assert!(!intervals_overlap(0.0, 100.0, 100.0, 50.0));
        assert!(!intervals_overlap(100.0, 50.0, 0.0, 100.0));
        assert!(intervals_overlap(0.0, 100.0, 99.0, 50.0));
        assert!(intervals_overlap(10.0, 5.0, 0.0, 100.0));
    }

    #[test]
    fn test_identical_items_get_distinct_sub_rows() {
        let rec = dummy();
        let items = vec![widened(&rec, 100.0, 200.0), widened(&rec, 100.0, 200.0)];
        let assignment = assign_sub_rows(&items);

        assert_eq!(assignment.sub_rows, vec![0, 1]);
        assert_eq!(assignment.sub_row_count(), 2);
        assert!(has_overlap(&items, 0));
        assert!(has_overlap(&items, 1));
    }

    #[test]
    fn test_first_fit_reuses_earliest_free_row() {
        let rec = dummy();
        let items = vec![
            widened(&rec, 0.0, 100.0),
            widened(&rec, 50.0, 100.0),
            widened(&rec, 120.0, 100.0),
        ];
        let assignment = assign_sub_rows(&items);

        // Third item clears the first but not the second
        assert_eq!(assignment.sub_rows, vec![0, 1, 0]);
        assert_eq!(assignment.rows, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_input_order_drives_assignment() {
        let rec = dummy();
        // A long item listed after two short disjoint ones
        let items = vec![
            widened(&rec, 0.0, 100.0),
            widened(&rec, 200.0, 100.0),
            widened(&rec, 50.0, 200.0),
        ];
        let assignment = assign_sub_rows(&items);
        assert_eq!(assignment.sub_rows, vec![0, 0, 1]);

        // Listed first, the long item keeps row 0 and pushes both others down
        let reordered = vec![items[2], items[0], items[1]];
        let assignment = assign_sub_rows(&reordered);
        assert_eq!(assignment.sub_rows, vec![0, 1, 1]);
    }

    #[test]
    fn test_no_sub_row_holds_overlapping_items() {
        let rec = dummy();
        let items: Vec<_> = (0..12)
            .map(|i| widened(&rec, (i * 37 % 200) as f64, 40.0 + (i * 13 % 90) as f64))
            .collect();
        let assignment = assign_sub_rows(&items);

        for row in &assignment.rows {
            for (n, &a) in row.iter().enumerate() {
                for &b in &row[n + 1..] {
                    assert!(!items_overlap(&items[a], &items[b]));
                }
            }
        }
    }

    #[test]
    fn test_vertical_extent() {
        let config = LayoutConfig::default();
        assert_eq!(vertical_extent(0, true, &config), (10.0, 50.0));
        assert_eq!(vertical_extent(2, true, &config), (120.0, 50.0));
        assert_eq!(vertical_extent(3, false, &config), (10.0, 100.0));
    }
}
