//! Source file format detection

use std::path::Path;

/// Extensions that are parsed as delimited text
pub const TEXT_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Spreadsheet extensions that are recognised but not parsed
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Kind of file handed to the importer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text
    Delimited,
    /// Binary spreadsheet (extension kept for messages)
    Spreadsheet(String),
}

impl FileFormat {
    /// Classify a path by extension
    ///
    /// Anything that is not a known spreadsheet extension is treated as
    /// delimited text, including files without an extension.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
            Self::Spreadsheet(extension)
        } else {
            Self::Delimited
        }
    }
}

/// File extensions the importer can read, with leading dots
pub fn supported_formats() -> Vec<String> {
    TEXT_EXTENSIONS.iter().map(|ext| format!(".{}", ext)).collect()
}
