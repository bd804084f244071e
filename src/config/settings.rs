//! User settings for bill-sync
//!
//! Manages the defaults the CLI applies when a flag is not given: delimiter,
//! header contracts for import and export, and whether exports carry a BOM.

use serde::{Deserialize, Serialize};

use super::paths::BillPaths;
use crate::error::BillError;
use crate::export::ExportOptions;
use crate::import::{ImportOptions, DEFAULT_DELIMITER};
use crate::models::HeaderStyle;

/// User settings for bill-sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Field delimiter for both import and export
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Prefix exported files with a byte-order marker
    #[serde(default = "default_write_bom")]
    pub write_bom: bool,

    /// Header contract expected when importing
    #[serde(default)]
    pub import_header: HeaderStyle,

    /// Header contract written when exporting
    #[serde(default = "default_export_header")]
    pub export_header: HeaderStyle,
}

fn default_schema_version() -> u32 {
    1
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_write_bom() -> bool {
    true
}

fn default_export_header() -> HeaderStyle {
    HeaderStyle::Human
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            delimiter: default_delimiter(),
            write_bom: default_write_bom(),
            import_header: HeaderStyle::default(),
            export_header: default_export_header(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &BillPaths) -> Result<Self, BillError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BillError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BillError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BillPaths) -> Result<(), BillError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BillError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BillError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Import options these settings describe
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::new()
            .with_delimiter(self.delimiter)
            .with_header(self.import_header)
    }

    /// Export options these settings describe
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new()
            .with_delimiter(self.delimiter)
            .with_header(self.export_header)
            .with_bom(self.write_bom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.delimiter, ',');
        assert!(settings.write_bom);
        assert_eq!(settings.import_header, HeaderStyle::Machine);
        assert_eq!(settings.export_header, HeaderStyle::Human);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.delimiter = ';';
        settings.export_header = HeaderStyle::Machine;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.delimiter, ';');
        assert_eq!(loaded.export_header, HeaderStyle::Machine);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"import_header": "human"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.import_header, HeaderStyle::Human);
        assert_eq!(loaded.delimiter, ',');
        assert!(loaded.write_bom);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BillPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(BillError::Config(_))
        ));
    }

    #[test]
    fn test_options_follow_settings() {
        let settings = Settings {
            delimiter: '\t',
            write_bom: false,
            ..Settings::default()
        };

        assert_eq!(settings.import_options().delimiter, '\t');
        let export = settings.export_options();
        assert_eq!(export.delimiter, '\t');
        assert!(!export.with_bom);
        assert_eq!(export.contract.style(), HeaderStyle::Human);
    }
}
