//! Text formatting utilities for the timeline viewer.
//!
//! This module provides helper functions for describing the loaded document
//! in the status bar.

use crate::state::DocumentSource;
use rtimeline::{TimelineLayout, TrackLayout};

/// Formats a count with a singular or plural noun.
///
/// # Examples
/// ```ignore
/// assert_eq!(pluralize(1, "item"), "1 item");
/// assert_eq!(pluralize(3, "item"), "3 items");
/// ```
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Describes where the current document came from.
///
/// Files are shown by file name only; the full path is in the tooltip.
pub fn format_document_source(source: &DocumentSource) -> String {
    match source {
        DocumentSource::File(path) => {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            format!("File: {}", name)
        }
        DocumentSource::Sample => "Built-in sample".to_string(),
    }
}

fn format_track(track: &TrackLayout) -> String {
    let mut text = format!("{}: {}", track.kind.title(), pluralize(track.items.len(), "item"));
    if track.sub_row_count > 1 {
        text.push_str(&format!(" in {}", pluralize(track.sub_row_count, "row")));
    }
    text
}

/// Item counts of both tracks, e.g. `Education: 4 items in 2 rows | Experience: 1 item`.
pub fn format_track_summary(layout: &TimelineLayout) -> String {
    layout
        .tracks()
        .into_iter()
        .map(format_track)
        .collect::<Vec<_>>()
        .join(" | ")
}
