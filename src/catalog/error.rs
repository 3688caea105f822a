//! Catalog loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating provider records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("station at position {index} has an empty name")]
    EmptyStationName { index: usize },

    #[error("station name '{name}' appears more than once")]
    DuplicateStation { name: String },

    #[error("date at position {index} has day {day}, expected 1-31")]
    InvalidDay { index: usize, day: u32 },

    #[error("slot {slot} of date {date} has an empty time label")]
    EmptyTimeLabel { date: usize, slot: usize },

    #[error("{count} dates are marked default-active, at most one is allowed")]
    MultipleDefaultDates { count: usize },
}

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog binary cache is malformed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("catalog failed validation with {} issue(s)", issues.len())]
    Invalid { issues: Vec<CatalogIssue> },
}
