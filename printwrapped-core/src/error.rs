//! Error types for printwrapped-core

use thiserror::Error;

/// Main error type for the printwrapped-core library
///
/// Missing data ([`Error::YearNotFound`]) and corrupt data
/// ([`Error::Io`], [`Error::Json`], [`Error::WeekdayKey`]) are kept
/// apart internally even though the host surfaces both as the same
/// not-found response.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// No statistics recorded for the requested year
    #[error("no statistics recorded for year {0}")]
    YearNotFound(i32),

    /// Weekday histogram key outside 0 (Monday) .. 6 (Sunday)
    #[error("weekday index out of range: {key:?}")]
    WeekdayKey { key: String },

    /// Asset loading error
    #[error("asset error: {0}")]
    Asset(String),
}

impl Error {
    /// True when the failure is plain missing data rather than a
    /// corrupt or unreadable record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::YearNotFound(_))
    }
}

/// Result type alias for printwrapped-core
pub type Result<T> = std::result::Result<T, Error>;
