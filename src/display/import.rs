//! Import report formatting
//!
//! Renders an `ImportResult` for the terminal: counts, rejected lines and a
//! short preview of the accepted records.

use crate::import::ImportResult;
use crate::models::BillRecord;

/// How many accepted records the report previews
pub const PREVIEW_ROWS: usize = 5;

/// Format a single record as a register row
pub fn format_record_row(record: &BillRecord) -> String {
    format!(
        "{} {:7} {:>12} {:12} {}",
        record.date.format("%Y-%m-%d"),
        record.kind,
        record.amount.to_string(),
        truncate(&record.category, 12),
        truncate(&record.description, 30)
    )
}

/// Format the full import report
pub fn format_import_report(result: &ImportResult) -> String {
    let mut output = String::new();

    if let Some(failure) = &result.failure {
        output.push_str("Import Failed\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("  {}\n", failure));
        return output;
    }

    output.push_str("Import Complete\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("  Imported:    {}\n", result.imported_count));
    output.push_str(&format!("  Failed:      {}\n", result.failed_count));
    output.push_str(&format!("  Summary:     {}\n", result.summary));

    if !result.errors.is_empty() {
        output.push('\n');
        output.push_str("Rejected lines:\n");
        for error in &result.errors {
            output.push_str(&format!("  {}\n", error));
        }
    }

    if !result.records.is_empty() {
        output.push('\n');
        output.push_str("Imported records:\n");
        for record in result.records.iter().take(PREVIEW_ROWS) {
            output.push_str(&format!("  {}\n", format_record_row(record)));
        }
        if result.records.len() > PREVIEW_ROWS {
            output.push_str(&format!(
                "  ... and {} more\n",
                result.records.len() - PREVIEW_ROWS
            ));
        }
    }

    output
}

/// Truncate to a number of characters, marking the cut with an ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ImportService;

    const HEADER: &str = "date,amount,kind,category,description,account";

    #[test]
    fn test_report_lists_rejected_lines() {
        let csv = format!(
            "{}\n2024-01-15,10,expense,餐饮,午餐,\n2024-1-15,10,expense,餐饮,午餐,",
            HEADER
        );
        let report = format_import_report(&ImportService::default().import_str(&csv));

        assert!(report.contains("Imported:    1"));
        assert!(report.contains("Failed:      1"));
        assert!(report.contains("line 3: validation failed"));
        assert!(report.contains("2024-01-15 expense"));
    }

    #[test]
    fn test_report_for_structural_failure() {
        let report = format_import_report(&ImportService::default().import_str("date,kind"));

        assert!(report.starts_with("Import Failed"));
        assert!(report.contains("amount, category, description"));
    }

    #[test]
    fn test_preview_is_capped() {
        let mut csv = HEADER.to_string();
        for day in 1..=7 {
            csv.push_str(&format!("\n2024-01-{:02},10,expense,餐饮,午餐,", day));
        }
        let report = format_import_report(&ImportService::default().import_str(&csv));

        assert!(report.contains("... and 2 more"));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("午餐午餐午餐", 4), "午餐午…");
        assert_eq!(truncate("lunch", 10), "lunch");
    }
}
