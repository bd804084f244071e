//! Custom error types for bill-sync
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Row-level failures have their own type,
//! [`RowError`], because they never abort an import.

use serde::Serialize;
use thiserror::Error;

/// The main error type for bill-sync operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum BillError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source document could not be read as text
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Required header columns are absent from the document
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The file is a format we recognise but do not parse
    #[error("Unsupported format '{extension}': only delimited text files can be imported")]
    UnsupportedFormat { extension: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BillError {
    /// Create a missing-columns error from column names
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this error aborted an import because of its header
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MissingColumns { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for BillError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BillError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// A single line of an import that was rejected
///
/// Line numbers are 1-indexed and count the header line, so the first data
/// row of a document is line 2.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("line {line}: {reason}")]
pub struct RowError {
    /// 1-indexed source line
    pub line: usize,
    /// Human-readable reason
    pub reason: String,
}

impl RowError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for bill-sync operations
pub type BillResult<T> = Result<T, BillError>;
