//! Built-in sample timeline.
//!
//! Lets the viewer show something without a document on disk, and gives the
//! tests a realistic input with overlapping entries in both tracks.

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::date::YearMonth;
use crate::reader::TimelineReader;
use crate::record::{TimelineData, TimelineRecord};

static SAMPLE: Lazy<TimelineData> = Lazy::new(build_sample);

fn entry(title: &str, org: &str, start: (i32, u32), end: (i32, u32), detail: &str) -> TimelineRecord {
    TimelineRecord::new(title, org, YearMonth::new(start.0, start.1), YearMonth::new(end.0, end.1))
        .with_detail(detail)
}

fn build_sample() -> TimelineData {
    TimelineData {
        education: vec![
            entry(
                "Industrial Design",
                "Nanyang Polytechnic",
                (2020, 4),
                (2023, 2),
                "Diploma in Industrial Design focusing on product development, user-centered design, and manufacturing processes.",
            )
            .with_score("2.76"),
            entry(
                "Graphic Design",
                "Coursera - California Institute of the Arts",
                (2024, 10),
                (2025, 3),
                "Comprehensive course covering visual communication, typography, branding, and digital design principles.",
            ),
            entry(
                "Web Design",
                "Coursera - University of Michigan",
                (2025, 4),
                (2025, 7),
                "Web design fundamentals including HTML, CSS, responsive design, and user experience principles.",
            ),
            entry(
                "User Experience and Digital Product Design",
                "Singapore Polytechnic",
                (2024, 10),
                (2025, 9),
                "Specialist Diploma focusing on UX research, prototyping, user interface design, and digital product strategy.",
            )
            .with_score("3.25"),
        ],
        experience: vec![
            entry(
                "Industrial Designer (Internship)",
                "One Maker Group",
                (2022, 8),
                (2022, 12),
                "Industrial designer, project lead, workshop coach and makerspace coach.",
            ),
            entry(
                "Industrial Designer (Part Time)",
                "One Maker Group",
                (2023, 1),
                (2023, 4),
                "Continued role with increased responsibilities in project management.",
            ),
            entry(
                "Urban Farmer",
                "Open Farm Community",
                (2023, 4),
                (2023, 9),
                "Hydroponics, microgreens and traditional landscape farming.",
            ),
            entry(
                "Barista",
                "Patisserie G Café",
                (2023, 4),
                (2023, 9),
                "Barista, sales and customer satisfaction.",
            ),
            entry(
                "National Service Full-Time",
                "Singapore Armed Forces",
                (2023, 9),
                (2025, 7),
                "HR, finance, events planning. Leadership role managing personnel affairs and organizing community events.",
            ),
            entry(
                "Supply Chain Intern",
                "Elizabeth Arden, Luxasia",
                (2025, 9),
                (2025, 12),
                "Logistics, inventory management and operational efficiency in the beauty industry.",
            ),
        ],
    }
}

/// The built-in sample timeline.
pub fn sample_timeline() -> &'static TimelineData {
    &SAMPLE
}

/// Reader that ignores its source and returns the sample timeline.
pub struct SampleTimelineReader;

impl SampleTimelineReader {
    pub fn new() -> Self {
        SampleTimelineReader
    }
}

impl Default for SampleTimelineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineReader for SampleTimelineReader {
    fn read(&self, _source: &str) -> Result<TimelineData> {
        Ok(sample_timeline().clone())
    }
}
