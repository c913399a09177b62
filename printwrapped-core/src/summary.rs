//! Display-ready projection of a yearly record.
//!
//! Derivation is a pure function of (year, record): the record is
//! never mutated, and deriving twice from the same record yields
//! field-for-field identical summaries.

use crate::error::{Error, Result};
use crate::stats::YearRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Weekday names indexed by histogram key (0=Monday .. 6=Sunday).
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Placeholder shown when a year has no weekday data.
pub const NO_WEEKDAY: &str = "-";

const SECONDS_MINUTE: u64 = 60;
const SECONDS_HOUR: u64 = 60 * SECONDS_MINUTE;
const SECONDS_DAY: u64 = 24 * SECONDS_HOUR;

/// One year of print statistics, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    /// The requested year
    pub year: i32,
    /// Prints that ran to completion
    pub prints_completed: u64,
    /// Cumulative print time, days scale (e.g. "12d 4h 36m")
    pub total_print_duration: String,
    /// Longest single print, hours scale (e.g. "37h 12m")
    pub longest_print: String,
    /// Weekday with the most started prints, or "-"
    pub busiest_weekday: String,
    /// Files uploaded during the year
    pub files_uploaded: u64,
    /// Distinct host versions seen during the year
    pub octoprint_versions: u64,
}

impl YearSummary {
    /// Derive the summary for `year` from its raw record.
    pub fn from_record(year: i32, record: &YearRecord) -> Result<Self> {
        Ok(Self {
            year,
            prints_completed: record.prints_finished,
            total_print_duration: format_duration_days(record.print_duration_total),
            longest_print: format_duration_hours(record.longest_print_duration),
            busiest_weekday: busiest_weekday(&record.prints_started_per_weekday)?.to_string(),
            files_uploaded: record.files_uploaded,
            octoprint_versions: record.seen_versions,
        })
    }
}

/// Weekday with the most started prints.
///
/// Scans the histogram in key order and replaces the running winner
/// only on a strictly greater count, so the first of several tied
/// weekdays wins. An empty histogram yields [`NO_WEEKDAY`]; a key that
/// is not an index into [`WEEKDAYS`] is corrupt data.
pub fn busiest_weekday(histogram: &BTreeMap<String, u64>) -> Result<&'static str> {
    let mut busiest: Option<(&String, u64)> = None;
    for (key, &count) in histogram {
        let replace = match busiest {
            Some((_, best)) => count > best,
            None => true,
        };
        if replace {
            busiest = Some((key, count));
        }
    }

    let Some((key, _)) = busiest else {
        return Ok(NO_WEEKDAY);
    };

    key.parse::<usize>()
        .ok()
        .and_then(|index| WEEKDAYS.get(index).copied())
        .ok_or_else(|| Error::WeekdayKey { key: key.clone() })
}

/// Format a cumulative duration on the days scale (e.g. "12d 4h 36m").
///
/// Minutes are floored, never rounded. From 100 days up the minutes
/// field is dropped so the string keeps fitting the card layout.
pub fn format_duration_days(seconds: u64) -> String {
    let days = seconds / SECONDS_DAY;
    let hours = (seconds % SECONDS_DAY) / SECONDS_HOUR;
    let minutes = (seconds % SECONDS_HOUR) / SECONDS_MINUTE;

    if days >= 100 {
        format!("{}d {}h", days, hours)
    } else {
        format!("{}d {}h {}m", days, hours, minutes)
    }
}

/// Format a single event duration on the hours scale (e.g. "37h 12m").
///
/// Minutes are floored, never rounded.
pub fn format_duration_hours(seconds: u64) -> String {
    let hours = seconds / SECONDS_HOUR;
    let minutes = (seconds % SECONDS_HOUR) / SECONDS_MINUTE;
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
        entries
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_busiest_weekday_tie_break_first_wins() {
        let hist = histogram(&[("0", 5), ("1", 5)]);
        assert_eq!(busiest_weekday(&hist).unwrap(), "Monday");
    }

    #[test]
    fn test_busiest_weekday_strictly_greater_replaces() {
        let hist = histogram(&[("0", 5), ("1", 5), ("4", 6)]);
        assert_eq!(busiest_weekday(&hist).unwrap(), "Friday");
    }

    #[test]
    fn test_busiest_weekday_empty_histogram() {
        assert_eq!(busiest_weekday(&BTreeMap::new()).unwrap(), NO_WEEKDAY);
    }

    #[test]
    fn test_busiest_weekday_out_of_range_key() {
        let hist = histogram(&[("7", 3)]);
        assert!(matches!(
            busiest_weekday(&hist),
            Err(Error::WeekdayKey { .. })
        ));
    }

    #[test]
    fn test_busiest_weekday_non_numeric_key() {
        let hist = histogram(&[("someday", 3)]);
        assert!(matches!(
            busiest_weekday(&hist),
            Err(Error::WeekdayKey { .. })
        ));
    }

    #[test]
    fn test_days_scale_boundaries() {
        assert_eq!(format_duration_days(0), "0d 0h 0m");
        assert_eq!(format_duration_days(59), "0d 0h 0m");
        assert_eq!(format_duration_days(86400), "1d 0h 0m");
        // 99d 23h 59m 59s still shows minutes
        assert_eq!(format_duration_days(8_639_999), "99d 23h 59m");
        // exactly 100 days drops them
        assert_eq!(format_duration_days(8_640_000), "100d 0h");
        assert_eq!(format_duration_days(8_643_600), "100d 1h");
    }

    #[test]
    fn test_days_scale_truncates_leftover_seconds() {
        // 1d 0h 0m 59s: leftover seconds never round the minute up
        assert_eq!(format_duration_days(86_459), "1d 0h 0m");
    }

    #[test]
    fn test_hours_scale() {
        assert_eq!(format_duration_hours(0), "0h 0m");
        assert_eq!(format_duration_hours(3661), "1h 1m");
        assert_eq!(format_duration_hours(3599), "0h 59m");
        // hours are not carried into days on this scale
        assert_eq!(format_duration_hours(90_000), "25h 0m");
    }

    #[test]
    fn test_from_record_defaults() {
        let summary = YearSummary::from_record(2024, &YearRecord::default()).unwrap();
        assert_eq!(summary.year, 2024);
        assert_eq!(summary.prints_completed, 0);
        assert_eq!(summary.total_print_duration, "0d 0h 0m");
        assert_eq!(summary.longest_print, "0h 0m");
        assert_eq!(summary.busiest_weekday, NO_WEEKDAY);
        assert_eq!(summary.files_uploaded, 0);
        assert_eq!(summary.octoprint_versions, 1);
    }

    #[test]
    fn test_from_record_is_pure() {
        let record = YearRecord {
            prints_finished: 11,
            print_duration_total: 90_061,
            longest_print_duration: 7_322,
            prints_started_per_weekday: histogram(&[("5", 2)]),
            files_uploaded: 4,
            seen_versions: 2,
        };

        let first = YearSummary::from_record(2023, &record).unwrap();
        let second = YearSummary::from_record(2023, &record).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.busiest_weekday, "Saturday");
        assert_eq!(first.total_print_duration, "1d 1h 1m");
        assert_eq!(first.longest_print, "2h 2m");
    }
}
