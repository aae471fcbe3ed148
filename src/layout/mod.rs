//! Timeline layout engine.
//!
//! Each track goes through four passes, each producing a new stage:
//! - `projection`: dates to pixel offsets and widths (`ProjectedItem`)
//! - `widening`: room for label text, bounded by the next item (`WidenedItem`)
//! - `overlap`: first-fit sub-row coloring
//! - vertical placement, yielding the final `PositionedItem`
//!
//! Tracks never interact. Layout is pure: the same input always produces
//! the same output.

pub mod overlap;
pub mod projection;
pub mod text_metrics;
pub mod widening;

use crate::config::LayoutConfig;
use crate::record::{TimelineData, TimelineRecord, TrackKind};

pub use overlap::{assign_sub_rows, intervals_overlap, SubRowAssignment};
pub use projection::{project_track, ProjectedItem};
pub use text_metrics::estimate_text_width;
pub use widening::{widen_track, WidenedItem};

/// A record with its final geometry, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedItem {
    pub kind: TrackKind,
    /// Position of the record in its track's input
    pub index: usize,
    pub record: TimelineRecord,
    /// `Mon YYYY - Mon YYYY`
    pub date_range: String,
    pub offset: f64,
    pub width: f64,
    pub original_end_offset: f64,
    pub top: f64,
    pub height: f64,
    pub sub_row: usize,
    /// Whether the item shares horizontal space with another item
    pub overlapping: bool,
}

impl PositionedItem {
    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn organization(&self) -> &str {
        &self.record.organization
    }

    pub fn score(&self) -> Option<&str> {
        self.record.score.as_deref()
    }

    pub fn detail(&self) -> &str {
        &self.record.detail
    }

    /// Type tag of the owning track.
    pub fn type_tag(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn right_edge(&self) -> f64 {
        self.offset + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Laid-out items of one track, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    pub kind: TrackKind,
    pub items: Vec<PositionedItem>,
    pub sub_row_count: usize,
}

impl TrackLayout {
    pub fn empty(kind: TrackKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            sub_row_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rightmost pixel reached by any item.
    pub fn right_extent(&self) -> f64 {
        self.items.iter().map(PositionedItem::right_edge).fold(0.0, f64::max)
    }

    /// Lowest pixel reached by any item.
    pub fn bottom_extent(&self) -> f64 {
        self.items.iter().map(PositionedItem::bottom).fold(0.0, f64::max)
    }
}

/// Layout of both tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub education: TrackLayout,
    pub experience: TrackLayout,
}

impl TimelineLayout {
    pub fn track(&self, kind: TrackKind) -> &TrackLayout {
        match kind {
            TrackKind::Education => &self.education,
            TrackKind::Experience => &self.experience,
        }
    }

    pub fn tracks(&self) -> [&TrackLayout; 2] {
        [&self.education, &self.experience]
    }

    pub fn item(&self, kind: TrackKind, index: usize) -> Option<&PositionedItem> {
        self.track(kind).items.get(index)
    }

    /// Width needed to show every item of both tracks.
    pub fn content_width(&self) -> f64 {
        self.education.right_extent().max(self.experience.right_extent())
    }
}

/// Runs the layout passes with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out both tracks of a timeline.
    pub fn layout(&self, data: &TimelineData) -> TimelineLayout {
        TimelineLayout {
            education: self.layout_track(TrackKind::Education, &data.education),
            experience: self.layout_track(TrackKind::Experience, &data.experience),
        }
    }

    /// Lays out a single track.
    pub fn layout_track(&self, kind: TrackKind, records: &[TimelineRecord]) -> TrackLayout {
        if records.is_empty() {
            return TrackLayout::empty(kind);
        }

        let projected = project_track(records, &self.config);
        let widened = widen_track(&projected, &self.config);
        let assignment = assign_sub_rows(&widened);

        let items: Vec<PositionedItem> = widened
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let sub_row = assignment.sub_rows[index];
                let overlapping = overlap::has_overlap(&widened, index);
                let (top, height) = overlap::vertical_extent(sub_row, overlapping, &self.config);

                PositionedItem {
                    kind,
                    index,
                    record: item.record.clone(),
                    date_range: item.record.date_range_label(),
                    offset: item.offset,
                    width: item.width,
                    original_end_offset: item.original_end_offset,
                    top,
                    height,
                    sub_row,
                    overlapping,
                }
            })
            .collect();

        log::debug!(
            "Laid out {} track: {} items, {} widened, {} sub-rows",
            kind,
            items.len(),
            widened.iter().filter(|item| item.was_widened()).count(),
            assignment.sub_row_count()
        );

        TrackLayout {
            kind,
            items,
            sub_row_count: assignment.sub_row_count(),
        }
    }
}

/// Lays out a timeline with the given configuration.
pub fn layout_timeline(data: &TimelineData, config: &LayoutConfig) -> TimelineLayout {
    LayoutEngine::new(config.clone()).layout(data)
}
