//! Capture dates.
//!
//! Crawlers and clients exchange dates as `YYYY-MM-DD`. Internally a date is
//! a chrono `NaiveDate`, so ordering is chronological rather than textual.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar day a snapshot was captured (or requested) on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureDate(NaiveDate);

impl CaptureDate {
    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidDate("date cannot be empty".into()));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|e| Error::InvalidDate(format!("{trimmed}: {e}")))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Milliseconds since the Unix epoch at UTC midnight of this day.
    ///
    /// This is the file stem the content store uses for a capture.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.and_time(NaiveTime::default()).and_utc().timestamp_millis()
    }
}

impl fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CaptureDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_display() {
        let date = CaptureDate::parse("2009-02-04").unwrap();
        assert_eq!(date.to_string(), "2009-02-04");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let date = CaptureDate::parse("  2020-06-01 ").unwrap();
        assert_eq!(date.to_string(), "2020-06-01");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(CaptureDate::parse("yesterday"), Err(Error::InvalidDate(_))));
        assert!(matches!(CaptureDate::parse("2020-13-01"), Err(Error::InvalidDate(_))));
        assert!(matches!(CaptureDate::parse(""), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = CaptureDate::parse("2008-08-31").unwrap();
        let later = CaptureDate::parse("2012-02-02").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_timestamp_millis() {
        assert_eq!(CaptureDate::parse("1970-01-01").unwrap().timestamp_millis(), 0);
        assert_eq!(CaptureDate::parse("1970-01-02").unwrap().timestamp_millis(), 86_400_000);
        assert_eq!(CaptureDate::parse("2009-02-04").unwrap().timestamp_millis(), 1_233_705_600_000);
    }

    #[test]
    fn test_serde_as_string() {
        let date: CaptureDate = serde_json::from_str("\"2020-01-01\"").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2020-01-01\"");
    }
}
