//! Timeline input records and the two-track document.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::{format_date_range, YearMonth};

/// The categorical lane a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Education,
    Experience,
}

impl TrackKind {
    /// Both tracks, in display order.
    pub const ALL: [TrackKind; 2] = [TrackKind::Education, TrackKind::Experience];

    /// Type tag handed to the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Education => "education",
            TrackKind::Experience => "experience",
        }
    }

    /// Heading shown next to the track.
    pub fn title(&self) -> &'static str {
        match self {
            TrackKind::Education => "Education",
            TrackKind::Experience => "Experience",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One education or experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRecord {
    pub title: String,
    #[serde(rename = "company", alias = "organization")]
    pub organization: String,
    #[serde(rename = "startDate", alias = "start")]
    pub start: YearMonth,
    #[serde(rename = "endDate", alias = "end")]
    pub end: YearMonth,
    #[serde(rename = "gpa", alias = "score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(rename = "details", alias = "detail", default)]
    pub detail: String,
}

impl TimelineRecord {
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        start: YearMonth,
        end: YearMonth,
    ) -> Self {
        Self {
            title: title.into(),
            organization: organization.into(),
            start,
            end,
            score: None,
            detail: String::new(),
        }
    }

    pub fn with_score(mut self, score: impl Into<String>) -> Self {
        self.score = Some(score.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// `Mon YYYY - Mon YYYY` label for this record.
    pub fn date_range_label(&self) -> String {
        format_date_range(self.start, self.end)
    }
}

/// A complete timeline: one ordered record list per track.
///
/// Record order is significant: it is the order in which overlapping
/// items are assigned to sub-rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    #[serde(default)]
    pub education: Vec<TimelineRecord>,
    #[serde(default)]
    pub experience: Vec<TimelineRecord>,
}

impl TimelineData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of a single track.
    pub fn track(&self, kind: TrackKind) -> &[TimelineRecord] {
        match kind {
            TrackKind::Education => &self.education,
            TrackKind::Experience => &self.experience,
        }
    }

    pub fn track_mut(&mut self, kind: TrackKind) -> &mut Vec<TimelineRecord> {
        match kind {
            TrackKind::Education => &mut self.education,
            TrackKind::Experience => &mut self.experience,
        }
    }

    pub fn total_records(&self) -> usize {
        self.education.len() + self.experience.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }

    /// Earliest start and latest end over both tracks.
    pub fn date_extent(&self) -> Option<(YearMonth, YearMonth)> {
        let records = self.education.iter().chain(self.experience.iter());
        let min = records.clone().map(|r| r.start.min(r.end)).min()?;
        let max = records.map(|r| r.end.max(r.start)).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_document_field_names() {
        let json = r#"{
            "education": [
                {
                    "title": "Industrial Design",
                    "company": "Nanyang Polytechnic",
                    "startDate": "2020-04",
                    "endDate": "2023-02",
                    "gpa": "2.76",
                    "details": "Diploma"
                }
            ]
        }"#;

        let data: TimelineData = serde_json::from_str(json).unwrap();
        assert_eq!(data.education.len(), 1);
        assert!(data.experience.is_empty());

        let record = &data.education[0];
        assert_eq!(record.organization, "Nanyang Polytechnic");
        assert_eq!(record.start, YearMonth::new(2020, 4));
        assert_eq!(record.end, YearMonth::new(2023, 2));
        assert_eq!(record.score.as_deref(), Some("2.76"));
        assert_eq!(record.detail, "Diploma");
    }

    #[test]
    fn test_deserialize_aliases_and_optional_fields() {
        let json = r#"{
            "title": "Barista",
            "organization": "Cafe",
            "startDate": "2023-04",
            "endDate": "2023-09"
        }"#;

        let record: TimelineRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.organization, "Cafe");
        assert_eq!(record.score, None);
        assert_eq!(record.detail, "");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{
            "title": "Bad",
            "company": "Nowhere",
            "startDate": "2023-14",
            "endDate": "2023-09"
        }"#;

        let err = serde_json::from_str::<TimelineRecord>(json).unwrap_err();
        assert!(err.to_string().contains("2023-14"));
    }

    #[test]
    fn test_score_is_omitted_when_absent() {
        let record = TimelineRecord::new("A", "B", YearMonth::new(2020, 1), YearMonth::new(2020, 6));
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("gpa").is_none());
        assert_eq!(json["startDate"], "2020-01");
    }

    #[test]
    fn test_date_extent() {
        let mut data = TimelineData::new();
        assert_eq!(data.date_extent(), None);

        data.education.push(TimelineRecord::new("A", "X", YearMonth::new(2021, 3), YearMonth::new(2022, 1)));
        data.experience.push(TimelineRecord::new("B", "Y", YearMonth::new(2020, 9), YearMonth::new(2021, 5)));

        assert_eq!(
            data.date_extent(),
            Some((YearMonth::new(2020, 9), YearMonth::new(2022, 1)))
        );
        assert_eq!(data.total_records(), 2);
        assert_eq!(data.track(TrackKind::Experience)[0].title, "B");
    }
}
