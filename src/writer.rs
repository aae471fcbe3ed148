use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::{Result, Context};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;

use crate::record::{TimelineData, TimelineRecord, TrackKind};

/// Collects timeline records and writes them as one JSON document.
pub struct TimelineWriter {
    writer: Box<dyn Write>,
    data: TimelineData,
}

impl TimelineWriter {
    /// Creates a new TimelineWriter for the specified file path.
    ///
    /// Automatically enables Brotli compression if the file path ends with `.br`
    /// (e.g., `timeline.json.br`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rtimeline::{TimelineWriter, TimelineRecord, TrackKind, YearMonth};
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = TimelineWriter::new("timeline.json.br")?;
    /// writer.write_record(
    ///     TrackKind::Education,
    ///     TimelineRecord::new("Web Design", "Coursera", YearMonth::new(2025, 4), YearMonth::new(2025, 7)),
    /// );
    /// writer.finish()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(TimelineWriter {
            writer,
            data: TimelineData::new(),
        })
    }

    /// Appends a record to the end of a track.
    pub fn write_record(&mut self, kind: TrackKind, record: TimelineRecord) {
        self.data.track_mut(kind).push(record);
    }

    pub fn record_count(&self) -> usize {
        self.data.total_records()
    }

    /// Serializes the collected document and flushes it to disk.
    pub fn finish(mut self) -> Result<TimelineData> {
        let json = serde_json::to_string_pretty(&self.data)
            .context("Failed to serialize to JSON")?;

        writeln!(self.writer, "{}", json)
            .context("Failed to write timeline")?;

        self.writer.flush()
            .context("Failed to flush writer")?;

        Ok(std::mem::take(&mut self.data))
    }
}

/// Writes a complete timeline document in one call.
pub fn write_timeline(file_path: &str, data: &TimelineData) -> Result<()> {
    let mut writer = TimelineWriter::new(file_path)?;
    for kind in TrackKind::ALL {
        for record in data.track(kind) {
            writer.write_record(kind, record.clone());
        }
    }
    writer.finish()?;
    log::info!("Timeline written to: {}", file_path);
    Ok(())
}
