use anyhow::{Context, Result};
use brotli::Decompressor;
use std::fs::File;
use std::io::{BufReader, Read};

use crate::record::TimelineData;

/// Trait for sources of timeline documents
pub trait TimelineReader {
    /// Reads a timeline document. `source` is interpreted by the implementation.
    fn read(&self, source: &str) -> Result<TimelineData>;
}

/// Reads JSON timeline documents from disk.
pub struct JsonTimelineReader;

impl JsonTimelineReader {
    pub fn new() -> Self {
        JsonTimelineReader
    }
}

impl Default for JsonTimelineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineReader for JsonTimelineReader {
    fn read(&self, source: &str) -> Result<TimelineData> {
        parse_timeline(source)
    }
}

/// Parses a timeline document from disk.
///
/// Brotli-compressed documents are detected by file extension (`.br`).
///
/// # Supported Formats
///
/// - `.json` — Plain JSON
/// - `.json.br` — Brotli-compressed JSON
///
/// # Examples
///
/// ```no_run
/// # use rtimeline::parse_timeline;
/// # fn main() -> anyhow::Result<()> {
/// let timeline = parse_timeline("timeline.json")?;
/// let compressed = parse_timeline("timeline.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_timeline(file_path: &str) -> Result<TimelineData> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let mut reader: Box<dyn Read> = if file_path.ends_with(".br") {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read file: {}", file_path))?;

    let data = parse_timeline_str(&text)
        .with_context(|| format!("Failed to parse timeline: {}", file_path))?;

    log::info!(
        "Loaded {}: {} education, {} experience records",
        file_path,
        data.education.len(),
        data.experience.len()
    );

    Ok(data)
}

/// Parses a timeline document from a JSON string.
pub fn parse_timeline_str(text: &str) -> Result<TimelineData> {
    let data: TimelineData = serde_json::from_str(text).context("Invalid timeline JSON")?;

    for kind in crate::record::TrackKind::ALL {
        for record in data.track(kind) {
            if record.end < record.start {
                log::warn!(
                    "{} record '{}' ends ({}) before it starts ({})",
                    kind,
                    record.title,
                    record.end,
                    record.start
                );
            }
        }
    }

    Ok(data)
}
