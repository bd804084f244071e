//! CLI command handler for bill import
//!
//! Reads a bill file, runs it through the import service and prints either a
//! report or the JSON-serialized result.

use std::path::PathBuf;

use clap::Args;

use super::HeaderArg;
use crate::config::Settings;
use crate::display::format_import_report;
use crate::error::{BillError, BillResult};
use crate::import::ImportService;

/// Arguments for `billsync import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the bill file
    pub file: PathBuf,

    /// Field delimiter (defaults to the configured delimiter)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Header contract the file uses
    #[arg(long, value_enum)]
    pub header: Option<HeaderArg>,

    /// Print the full result as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Handle the import command
///
/// Returns whether at least one record was imported.
pub fn handle_import_command(settings: &Settings, args: ImportArgs) -> BillResult<bool> {
    let mut options = settings.import_options();
    if let Some(delimiter) = args.delimiter {
        options = options.with_delimiter(delimiter);
    }
    if let Some(header) = args.header {
        options = options.with_header(header.into());
    }

    let result = ImportService::new(options).import_file(&args.file);

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(BillError::from)?;
        println!("{}", json);
    } else {
        print!("{}", format_import_report(&result));
    }

    Ok(result.succeeded)
}
