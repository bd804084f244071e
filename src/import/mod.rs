//! Bill import
//!
//! Parses delimited bill documents into validated records:
//! - `tokenizer`: splits a line into fields
//! - `mapper`: aligns fields with the header row
//! - `validator`: accepts or rejects a mapped row
//! - `service`: runs a whole document and collects the outcome

pub mod format;
pub mod mapper;
pub mod service;
pub mod tokenizer;
pub mod validator;

pub use format::{supported_formats, FileFormat};
pub use mapper::{map_row, BillDraft};
pub use service::{ImportOptions, ImportResult, ImportService};
pub use tokenizer::{tokenize_line, DEFAULT_DELIMITER};
pub use validator::{validate, ValidationFailure};
