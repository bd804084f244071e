//! Bill import service
//!
//! Drives a whole document through tokenizing, mapping and validation. A bad
//! row never stops the batch; only a missing required column or an unreadable
//! source aborts the run, and even then the caller gets an `ImportResult`.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::format::FileFormat;
use super::mapper::map_row;
use super::tokenizer::{tokenize_line, DEFAULT_DELIMITER};
use super::validator::validate;
use crate::error::{BillError, RowError};
use crate::models::{BillRecord, HeaderContract, HeaderStyle};

/// Byte-order marker written by downloadable exports
const BOM: char = '\u{feff}';

/// Options for one import run
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Field delimiter
    pub delimiter: char,
    /// Column names the document must use
    pub contract: HeaderContract,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            contract: HeaderContract::machine(),
        }
    }
}

impl ImportOptions {
    /// Create default options (comma, machine header)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the header contract
    pub fn with_header(mut self, style: HeaderStyle) -> Self {
        self.contract = style.contract();
        self
    }
}

/// Result of a completed import
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    /// True when at least one record was imported
    pub succeeded: bool,
    /// One-line human-readable outcome
    pub summary: String,
    /// Number of rows accepted
    pub imported_count: usize,
    /// Number of rows rejected
    pub failed_count: usize,
    /// Rejected rows in source order
    pub errors: Vec<RowError>,
    /// Accepted records in source order
    pub records: Vec<BillRecord>,
    /// Error that aborted the whole run, if any
    pub failure: Option<BillError>,
}

impl ImportResult {
    fn aborted(failure: BillError) -> Self {
        Self {
            succeeded: false,
            summary: failure.to_string(),
            imported_count: 0,
            failed_count: 0,
            errors: Vec::new(),
            records: Vec::new(),
            failure: Some(failure),
        }
    }

    /// Per-line error messages, e.g. "line 3: date is empty"
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Missing header columns, when the run aborted on its header
    pub fn missing_columns(&self) -> Option<&[String]> {
        match &self.failure {
            Some(BillError::MissingColumns { columns }) => Some(columns.as_slice()),
            _ => None,
        }
    }
}

/// Service for importing bill documents
#[derive(Debug, Clone, Default)]
pub struct ImportService {
    options: ImportOptions,
}

impl ImportService {
    /// Create a new import service
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import a document held in memory
    pub fn import_str(&self, text: &str) -> ImportResult {
        let contract = &self.options.contract;
        let delimiter = self.options.delimiter;

        let text = text.strip_prefix(BOM).unwrap_or(text);
        let mut lines = text.split('\n');

        let header = tokenize_line(lines.next().unwrap_or(""), delimiter);
        let missing = contract.missing_from(&header);
        if !missing.is_empty() {
            warn!(columns = ?missing, "Import aborted: required columns missing");
            return ImportResult::aborted(BillError::missing_columns(missing));
        }

        info!(
            header = %contract.style(),
            delimiter = %delimiter.escape_default(),
            "Importing bill document"
        );

        let mut records = Vec::new();
        let mut errors = Vec::new();

        // Line 1 is the header
        for (line_number, line) in (2..).zip(lines) {
            if line.trim().is_empty() {
                continue;
            }

            let values = tokenize_line(line, delimiter);
            let draft = map_row(&header, &values, contract);

            match validate(draft) {
                Ok(record) => records.push(record),
                Err(failure) => {
                    debug!(line = line_number, %failure, "Rejected row");
                    errors.push(RowError::new(
                        line_number,
                        format!("validation failed: {}", failure),
                    ));
                }
            }
        }

        let imported_count = records.len();
        let failed_count = errors.len();
        let summary = format!("imported {} records, {} failed", imported_count, failed_count);
        info!(imported = imported_count, failed = failed_count, "Import finished");

        ImportResult {
            succeeded: imported_count > 0,
            summary,
            imported_count,
            failed_count,
            errors,
            records,
            failure: None,
        }
    }

    /// Import raw bytes, which must be UTF-8
    pub fn import_bytes(&self, bytes: &[u8]) -> ImportResult {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.import_str(text),
            Err(e) => {
                warn!(error = %e, "Import aborted: document is not UTF-8");
                ImportResult::aborted(BillError::Io(format!("Document is not valid UTF-8: {}", e)))
            }
        }
    }

    /// Read a whole document from a reader, then import it
    pub fn import_reader<R: Read>(&self, mut reader: R) -> ImportResult {
        let mut bytes = Vec::new();
        if let Err(e) = reader.read_to_end(&mut bytes) {
            warn!(error = %e, "Import aborted: failed to read document");
            return ImportResult::aborted(BillError::Io(format!("Failed to read document: {}", e)));
        }
        self.import_bytes(&bytes)
    }

    /// Import a file from disk
    pub fn import_file(&self, path: &Path) -> ImportResult {
        if let FileFormat::Spreadsheet(extension) = FileFormat::from_path(path) {
            warn!(path = %path.display(), "Import aborted: spreadsheet files are not parsed");
            return ImportResult::aborted(BillError::UnsupportedFormat { extension });
        }

        match std::fs::read(path) {
            Ok(bytes) => self.import_bytes(&bytes),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Import aborted: failed to read file");
                ImportResult::aborted(BillError::Io(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }
}
