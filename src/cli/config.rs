//! CLI command handler for settings
//!
//! `billsync config` prints the effective settings. Any setter flag updates
//! the settings file first.

use clap::Args;
use tracing::info;

use super::HeaderArg;
use crate::config::{BillPaths, Settings};
use crate::error::BillResult;

/// Arguments for `billsync config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the default field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Set the header contract expected on import
    #[arg(long, value_enum)]
    pub import_header: Option<HeaderArg>,

    /// Set the header contract written on export
    #[arg(long, value_enum)]
    pub export_header: Option<HeaderArg>,

    /// Write a byte-order marker on export by default
    #[arg(long, conflicts_with = "no_bom")]
    pub bom: bool,

    /// Do not write a byte-order marker on export by default
    #[arg(long)]
    pub no_bom: bool,
}

impl ConfigArgs {
    /// Apply setter flags, returning true when anything was given
    fn apply(&self, settings: &mut Settings) -> bool {
        let mut changed = false;

        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter;
            changed = true;
        }
        if let Some(header) = self.import_header {
            settings.import_header = header.into();
            changed = true;
        }
        if let Some(header) = self.export_header {
            settings.export_header = header.into();
            changed = true;
        }
        if self.bom || self.no_bom {
            settings.write_bom = self.bom;
            changed = true;
        }

        changed
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &BillPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> BillResult<()> {
    let mut settings = settings.clone();
    if args.apply(&mut settings) {
        settings.save(paths)?;
        info!(settings_file = %paths.settings_file().display(), "Saved settings");
        println!("Settings saved to: {}", paths.settings_file().display());
        println!();
    }

    println!("bill-sync Configuration");
    println!("=======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Delimiter:      {:?}", settings.delimiter);
    println!("  Import header:  {}", settings.import_header);
    println!("  Export header:  {}", settings.export_header);
    println!("  Write BOM:      {}", settings.write_bom);

    Ok(())
}
