//! Display formatting for terminal output

pub mod import;

pub use import::{format_import_report, format_record_row};
