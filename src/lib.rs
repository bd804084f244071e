//! bill-sync - import and export of delimited bill files
//!
//! This library parses delimited financial-transaction ("bill") documents from
//! untrusted sources, validates every row, and renders records back to the
//! same format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Bill records, money and header contracts
//! - `import`: Tokenizer, row mapper, validator and the import service
//! - `export`: Serializer and the example template
//! - `display`: Terminal formatting of import reports
//! - `cli`: Command handlers for the `billsync` binary
//!
//! # Example
//!
//! ```rust
//! use bill_sync::export::{csv_template, export_records, ExportOptions};
//! use bill_sync::import::ImportService;
//!
//! let result = ImportService::default().import_str(csv_template());
//! assert_eq!(result.imported_count, 2);
//!
//! let text = export_records(&result.records, &ExportOptions::machine()).unwrap();
//! assert_eq!(text, csv_template());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use error::{BillError, BillResult, RowError};
