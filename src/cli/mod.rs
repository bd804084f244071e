//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the import/export layer.

pub mod config;
pub mod export;
pub mod import;
pub mod template;

use clap::ValueEnum;

use crate::import::{supported_formats, format::SPREADSHEET_EXTENSIONS};
use crate::models::HeaderStyle;

pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportArgs};
pub use import::{handle_import_command, ImportArgs};
pub use template::{handle_template_command, TemplateArgs};

/// Header contract selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderArg {
    /// Canonical field names (date, amount, kind, ...)
    Machine,
    /// Localized labels (日期, 金额, 类型, ...)
    Human,
}

impl From<HeaderArg> for HeaderStyle {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Machine => HeaderStyle::Machine,
            HeaderArg::Human => HeaderStyle::Human,
        }
    }
}

/// Print the file formats the importer understands
pub fn handle_formats_command() {
    println!("Supported import formats:");
    for ext in supported_formats() {
        println!("  {}", ext);
    }
    println!();
    println!("Recognised but not imported (save as CSV first):");
    for ext in SPREADSHEET_EXTENSIONS {
        println!("  .{}", ext);
    }
}
