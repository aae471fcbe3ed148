//! Utility modules for the timeline viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_document_source, format_track_summary, pluralize};
