//! CLI command handler for the example document

use std::path::PathBuf;

use clap::Args;

use super::export::sample_records_json;
use crate::error::{BillError, BillResult};
use crate::export::csv_template;

/// Arguments for `billsync template`
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,

    /// Emit the example records as JSON (input for `export`)
    #[arg(long)]
    pub records: bool,
}

/// Handle the template command
pub fn handle_template_command(args: TemplateArgs) -> BillResult<()> {
    let contents = if args.records {
        sample_records_json()?
    } else {
        csv_template().to_string()
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &contents).map_err(|e| {
                BillError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("Template written to: {}", path.display());
        }
        None => println!("{}", contents),
    }

    Ok(())
}
