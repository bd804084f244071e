//! CLI commands for bill export
//!
//! Records are read from a JSON array (the same shape `import --json` prints
//! under `records`) and written as a delimited document.

use std::path::{Path, PathBuf};

use clap::Args;

use super::HeaderArg;
use crate::config::Settings;
use crate::error::{BillError, BillResult};
use crate::export::{export_records, template_records};
use crate::models::BillRecord;

/// Arguments for `billsync export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON file holding an array of bill records
    pub records: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Field delimiter (defaults to the configured delimiter)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Header contract to write
    #[arg(long, value_enum)]
    pub header: Option<HeaderArg>,

    /// Write a byte-order marker
    #[arg(long, conflicts_with = "no_bom")]
    pub bom: bool,

    /// Do not write a byte-order marker
    #[arg(long)]
    pub no_bom: bool,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> BillResult<()> {
    let records = read_records(&args.records)?;

    let mut options = settings.export_options();
    if let Some(delimiter) = args.delimiter {
        options = options.with_delimiter(delimiter);
    }
    if let Some(header) = args.header {
        options = options.with_header(header.into());
    }
    if args.bom {
        options = options.with_bom(true);
    }
    if args.no_bom {
        options = options.with_bom(false);
    }

    // Render first so a refused record leaves no partial file behind
    let text = export_records(&records, &options)?;
    std::fs::write(&args.output, text).map_err(|e| {
        BillError::Export(format!(
            "Failed to write file {}: {}",
            args.output.display(),
            e
        ))
    })?;

    println!(
        "Exported {} records to: {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}

/// Read a JSON array of records
pub fn read_records(path: &Path) -> BillResult<Vec<BillRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BillError::Io(format!("Failed to read records file {}: {}", path.display(), e))
    })?;
    let records: Vec<BillRecord> = serde_json::from_str(&contents)?;
    Ok(records)
}

/// Write the example records as JSON, a starting point for `export`
pub fn sample_records_json() -> BillResult<String> {
    Ok(serde_json::to_string_pretty(&template_records())?)
}
