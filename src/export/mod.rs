//! Export module for bill-sync
//!
//! Provides the reverse path of the importer:
//! - CSV: records rendered with either header contract, optionally with a BOM
//! - Template: a canonical example document

pub mod csv;
pub mod template;

pub use self::csv::{export_records, export_to_writer, ExportOptions, BOM};
pub use template::{csv_template, template_records, CSV_TEMPLATE};
