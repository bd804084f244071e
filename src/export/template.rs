//! Example bill document
//!
//! The template doubles as user documentation and as a fixture: it must
//! always import cleanly with the default import options.

use crate::import::{ImportOptions, ImportService};
use crate::models::BillRecord;

/// Canonical example document in the machine header contract
pub const CSV_TEMPLATE: &str = "date,amount,kind,category,description,account\n\
2024-01-15,100.00,expense,餐饮,午餐,现金\n\
2024-01-16,2000.00,income,工资,月薪,银行卡";

/// The example document
pub fn csv_template() -> &'static str {
    CSV_TEMPLATE
}

/// Records described by the example document
pub fn template_records() -> Vec<BillRecord> {
    ImportService::new(ImportOptions::default())
        .import_str(CSV_TEMPLATE)
        .records
}
