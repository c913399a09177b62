//! Yearly statistics archive
//!
//! The host's aggregation job writes one JSON record per calendar year
//! (`2023.json`, `2024.json`, ...) into an archive directory. This
//! module locates and parses those records. The files are read-only
//! inputs; nothing here ever writes to the archive.
//!
//! # Error Handling
//!
//! Lookups distinguish two failure classes internally:
//!
//! - **Missing data**: the archive directory or the year file does not
//!   exist ([`Error::YearNotFound`]).
//! - **Corrupt data**: the file exists but does not parse, a field has
//!   the wrong type, or the weekday histogram carries an out-of-range
//!   key ([`Error::Json`], [`Error::Io`], [`Error::WeekdayKey`]).
//!
//! [`StatsArchive::resolve`] collapses both to `None` after logging,
//! so a data problem is externally indistinguishable from a missing
//! year. [`StatsArchive::try_resolve`] keeps the distinction for
//! diagnostics and tests.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::summary::YearSummary;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Raw statistics record for one calendar year.
///
/// Mirrors the JSON written by the host. Every field is optional on
/// disk; absent fields take the documented defaults, so records from
/// older host versions still parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YearRecord {
    /// Prints that ran to completion
    pub prints_finished: u64,

    /// Cumulative print time in seconds
    pub print_duration_total: u64,

    /// Duration of the single longest print in seconds
    pub longest_print_duration: u64,

    /// Prints started per weekday, keyed by stringified index
    /// (0=Monday .. 6=Sunday). A `BTreeMap` keeps iteration in key
    /// order, which pins the first-seen tie-break of the busiest
    /// weekday scan.
    pub prints_started_per_weekday: BTreeMap<String, u64>,

    /// Files uploaded during the year
    pub files_uploaded: u64,

    /// Distinct host versions seen during the year
    pub seen_versions: u64,
}

impl Default for YearRecord {
    fn default() -> Self {
        Self {
            prints_finished: 0,
            print_duration_total: 0,
            longest_print_duration: 0,
            prints_started_per_weekday: BTreeMap::new(),
            files_uploaded: 0,
            seen_versions: 1,
        }
    }
}

/// Locates and parses the per-year statistics records.
///
/// Stateless: every call opens, reads and drops its own file handle.
/// The archive directory is treated as read-only input.
pub struct StatsArchive {
    dir: PathBuf,
}

impl StatsArchive {
    /// Create an archive over the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create an archive at the configured statistics directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.stats_dir())
    }

    /// Directory this archive reads from.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Path of the record file for `year`, if both the archive
    /// directory and the file exist.
    fn year_file(&self, year: i32) -> Option<PathBuf> {
        if !self.dir.is_dir() {
            return None;
        }

        let path = self.dir.join(format!("{}.json", year));
        if !path.is_file() {
            return None;
        }

        Some(path)
    }

    /// Load and parse the raw record for `year`.
    pub fn load(&self, year: i32) -> Result<YearRecord> {
        let path = self.year_file(year).ok_or(Error::YearNotFound(year))?;
        let content = std::fs::read_to_string(&path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Derive the display summary for `year`.
    ///
    /// The returned error distinguishes missing data from corrupt
    /// data; callers that only care about presence use
    /// [`StatsArchive::resolve`].
    pub fn try_resolve(&self, year: i32) -> Result<YearSummary> {
        let record = self.load(year)?;
        YearSummary::from_record(year, &record)
    }

    /// Derive the display summary for `year`, downgrading every
    /// failure to `None`.
    ///
    /// This is the host-facing contract: it never fails. Corrupt or
    /// unreadable records are logged with their file context and then
    /// reported as absent.
    pub fn resolve(&self, year: i32) -> Option<YearSummary> {
        match self.try_resolve(year) {
            Ok(summary) => Some(summary),
            Err(err) if err.is_not_found() => {
                tracing::debug!(year, dir = %self.dir.display(), "no statistics recorded");
                None
            }
            Err(err) => {
                tracing::error!(
                    year,
                    dir = %self.dir.display(),
                    error = %err,
                    "failed to read yearly statistics"
                );
                None
            }
        }
    }

    /// Years with a statistics record in the archive, unordered.
    ///
    /// Only file names of exactly four digits plus `.json` count;
    /// directories and other entries are skipped. An absent archive
    /// directory yields an empty list. Never fails.
    pub fn available_years(&self) -> Vec<i32> {
        let pattern = self.dir.join("[0-9][0-9][0-9][0-9].json");

        let entries = match glob::glob(&pattern.to_string_lossy()) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %self.dir.display(), error = %err, "invalid archive glob");
                return Vec::new();
            }
        };

        entries
            .flatten()
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                stem.parse().ok()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn archive_with(files: &[(&str, &str)]) -> (TempDir, StatsArchive) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let archive = StatsArchive::new(dir.path());
        (dir, archive)
    }

    #[test]
    fn test_record_defaults() {
        let record: YearRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.prints_finished, 0);
        assert_eq!(record.print_duration_total, 0);
        assert_eq!(record.longest_print_duration, 0);
        assert!(record.prints_started_per_weekday.is_empty());
        assert_eq!(record.files_uploaded, 0);
        assert_eq!(record.seen_versions, 1);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: YearRecord =
            serde_json::from_str(r#"{"prints_finished": 3, "future_metric": true}"#).unwrap();
        assert_eq!(record.prints_finished, 3);
    }

    #[test]
    fn test_record_rejects_wrong_types() {
        assert!(serde_json::from_str::<YearRecord>(r#"{"prints_finished": "many"}"#).is_err());
        assert!(serde_json::from_str::<YearRecord>(r#"{"print_duration_total": -5}"#).is_err());
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let archive = StatsArchive::new(dir.path().join("does-not-exist"));

        let err = archive.try_resolve(2023).unwrap_err();
        assert!(err.is_not_found());
        assert!(archive.resolve(2023).is_none());
        assert!(archive.available_years().is_empty());
    }

    #[test]
    fn test_missing_year_is_not_found() {
        let (_dir, archive) = archive_with(&[("2022.json", "{}")]);

        let err = archive.try_resolve(2023).unwrap_err();
        assert!(err.is_not_found());
        assert!(archive.resolve(2023).is_none());
    }

    #[test]
    fn test_resolve_well_formed_record() {
        let (_dir, archive) = archive_with(&[(
            "2023.json",
            r#"{
                "prints_finished": 42,
                "print_duration_total": 90061,
                "longest_print_duration": 3661,
                "prints_started_per_weekday": {"0": 5, "4": 9},
                "files_uploaded": 17,
                "seen_versions": 3
            }"#,
        )]);

        let summary = archive.resolve(2023).unwrap();
        assert_eq!(summary.year, 2023);
        assert_eq!(summary.prints_completed, 42);
        assert_eq!(summary.total_print_duration, "1d 1h 1m");
        assert_eq!(summary.longest_print, "1h 1m");
        assert_eq!(summary.busiest_weekday, "Friday");
        assert_eq!(summary.files_uploaded, 17);
        assert_eq!(summary.octoprint_versions, 3);
    }

    #[test]
    fn test_corrupt_json_downgrades_to_none() {
        let (_dir, archive) = archive_with(&[("2023.json", "not json at all")]);

        let err = archive.try_resolve(2023).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(archive.resolve(2023).is_none());
    }

    #[test]
    fn test_out_of_range_weekday_downgrades_to_none() {
        let (_dir, archive) = archive_with(&[(
            "2023.json",
            r#"{"prints_started_per_weekday": {"7": 12}}"#,
        )]);

        let err = archive.try_resolve(2023).unwrap_err();
        assert!(matches!(err, Error::WeekdayKey { .. }));
        assert!(archive.resolve(2023).is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let (_dir, archive) = archive_with(&[(
            "2023.json",
            r#"{"prints_finished": 8, "prints_started_per_weekday": {"2": 4}}"#,
        )]);

        let first = archive.resolve(2023).unwrap();
        let second = archive.resolve(2023).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_available_years_filters_names() {
        let (dir, archive) = archive_with(&[
            ("2023.json", "{}"),
            ("2024.json", "{}"),
            ("abcd.json", "{}"),
            ("2023.txt", "{}"),
            ("20231.json", "{}"),
            ("202.json", "{}"),
        ]);
        // A directory whose name matches the pattern must be skipped.
        fs::create_dir(dir.path().join("1999.json")).unwrap();

        let mut years = archive.available_years();
        years.sort_unstable();
        assert_eq!(years, vec![2023, 2024]);
    }
}
