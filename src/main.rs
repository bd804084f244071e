use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use bill_sync::cli::{
    handle_config_command, handle_export_command, handle_formats_command, handle_import_command,
    handle_template_command, ConfigArgs, ExportArgs, ImportArgs, TemplateArgs,
};
use bill_sync::config::{BillPaths, Settings};

#[derive(Parser)]
#[command(
    name = "billsync",
    version,
    about = "Import, validate and export delimited bill files",
    long_about = "billsync reads delimited bill (transaction) files, validates every \
                  row and reports what was accepted. It can also write records back \
                  out in the same format, with machine or localized column labels."
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import and validate a bill file
    Import(ImportArgs),

    /// Export records from a JSON file to a bill file
    Export(ExportArgs),

    /// Print or write the example bill document
    Template(TemplateArgs),

    /// List supported file formats
    Formats,

    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BillPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(settings_file = %paths.settings_file().display(), "Loaded settings");

    match cli.command {
        Some(Commands::Import(args)) => {
            if !handle_import_command(&settings, args)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Export(args)) => handle_export_command(&settings, args)?,
        Some(Commands::Template(args)) => handle_template_command(args)?,
        Some(Commands::Formats) => handle_formats_command(),
        Some(Commands::Config(args)) => handle_config_command(&paths, &settings, args)?,
        None => {
            println!("billsync - bill import/export");
            println!();
            println!("Run 'billsync --help' for usage information.");
            println!("Run 'billsync template' to see the expected file layout.");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = match std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty()) {
        Some(_) => EnvFilter::from_default_env(),
        // RUST_LOG unset: log only this binary and the library
        None => EnvFilter::new(format!(
            "{}={},bill_sync={}",
            env!("CARGO_CRATE_NAME"),
            level,
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
