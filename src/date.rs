//! Year/month dates used by timeline records.
//!
//! Records carry month granularity only. Dates are written as `YYYY-MM`
//! in timeline documents and rendered as `Mon YYYY` in labels.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Short month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. `month` is one-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Zero-based month index (January = 0).
    pub fn month0(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// Short month name, e.g. "Apr".
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month0() as usize).min(11)]
    }

    /// Formats as `Mon YYYY`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("Invalid date '{}': expected YYYY-MM", s))?;

        let year: i32 = year
            .parse()
            .with_context(|| format!("Invalid year in date '{}'", s))?;
        let month: u32 = month
            .parse()
            .with_context(|| format!("Invalid month in date '{}'", s))?;

        if !(1..=12).contains(&month) {
            anyhow::bail!("Invalid date '{}': month must be in 1..=12", s);
        }

        Ok(Self { year, month })
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<YearMonth>().map_err(|e| serde::de::Error::custom(format!("{:#}", e)))
    }
}

/// Formats a date range as `Mon YYYY - Mon YYYY`.
///
/// ```
/// use rtimeline::{format_date_range, YearMonth};
///
/// let label = format_date_range(YearMonth::new(2025, 4), YearMonth::new(2025, 7));
/// assert_eq!(label, "Apr 2025 - Jul 2025");
/// ```
pub fn format_date_range(start: YearMonth, end: YearMonth) -> String {
    format!("{} - {}", start.label(), end.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let date: YearMonth = "2020-04".parse().unwrap();
        assert_eq!(date, YearMonth::new(2020, 4));
        assert_eq!(date.month0(), 3);
        assert_eq!(date.to_string(), "2020-04");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("2020".parse::<YearMonth>().is_err());
        assert!("2020-13".parse::<YearMonth>().is_err());
        assert!("2020-00".parse::<YearMonth>().is_err());
        assert!("abcd-01".parse::<YearMonth>().is_err());

        let err = "2020-13".parse::<YearMonth>().unwrap_err();
        assert!(err.to_string().contains("2020-13"));
    }

    #[test]
    fn test_ordering_by_year_then_month() {
        let a = YearMonth::new(2023, 12);
        let b = YearMonth::new(2024, 1);
        assert!(a < b);
        assert!(YearMonth::new(2024, 2) > b);
    }

    #[test]
    fn test_date_range_label() {
        assert_eq!(
            format_date_range(YearMonth::new(2025, 4), YearMonth::new(2025, 7)),
            "Apr 2025 - Jul 2025"
        );
        assert_eq!(
            format_date_range(YearMonth::new(2020, 1), YearMonth::new(2023, 12)),
            "Jan 2020 - Dec 2023"
        );
    }

    #[test]
    fn test_serde_as_string() {
        let date = YearMonth::new(2024, 10);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-10\"");

        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);

        assert!(serde_json::from_str::<YearMonth>("\"2024-1x\"").is_err());
    }
}
