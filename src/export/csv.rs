//! CSV Export functionality
//!
//! Renders bill records as a delimited document: one header line, then one
//! line per record in caller order. Lines are joined with `\n` and there is no
//! trailing newline, so the same records always produce the same bytes.
//!
//! The importer drops quote characters, splits on `\n` and trims every field.
//! A record whose text would not survive that is refused with
//! `BillError::Export` instead of being written lossily.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{BillError, BillResult};
use crate::import::tokenizer::QUOTE;
use crate::import::validator::is_date_shaped;
use crate::import::DEFAULT_DELIMITER;
use crate::models::{BillRecord, Column, HeaderContract, HeaderStyle};

/// Byte-order marker prepended to downloadable exports
pub const BOM: char = '\u{feff}';

/// Options for one export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Field delimiter (must be ASCII)
    pub delimiter: char,
    /// Column labels for the header line and kind values
    pub contract: HeaderContract,
    /// Prefix the document with a byte-order marker
    pub with_bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            contract: HeaderContract::human(),
            with_bom: false,
        }
    }
}

impl ExportOptions {
    /// Human-labelled export (the download format)
    pub fn new() -> Self {
        Self::default()
    }

    /// Machine-labelled export that re-imports with default import options
    pub fn machine() -> Self {
        Self::default().with_header(HeaderStyle::Machine)
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the header contract
    pub fn with_header(mut self, style: HeaderStyle) -> Self {
        self.contract = style.contract();
        self
    }

    /// Set whether a byte-order marker is written
    pub fn with_bom(mut self, with_bom: bool) -> Self {
        self.with_bom = with_bom;
        self
    }

    fn delimiter_byte(&self) -> BillResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(BillError::Export(format!(
                "Delimiter must be an ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }
}

/// Render records as a delimited document
pub fn export_records(records: &[BillRecord], options: &ExportOptions) -> BillResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(options.contract.labels())?;
    for (position, record) in records.iter().enumerate() {
        let fields = render_fields(record, &options.contract);
        check_fields(position + 1, &fields, &options.contract)?;
        writer.write_record(&fields)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BillError::Export(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| BillError::Export(e.to_string()))?;

    // Lines are joined, not terminated
    if text.ends_with('\n') {
        text.pop();
    }
    if options.with_bom {
        text.insert(0, BOM);
    }

    debug!(
        records = records.len(),
        header = %options.contract.style(),
        "Exported bill records"
    );
    Ok(text)
}

/// Render records and write them to any writer
pub fn export_to_writer<W: Write>(
    records: &[BillRecord],
    options: &ExportOptions,
    writer: &mut W,
) -> BillResult<()> {
    let text = export_records(records, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| BillError::Export(e.to_string()))?;
    writer.flush().map_err(|e| BillError::Export(e.to_string()))?;
    Ok(())
}

/// Fields of one record in export column order
fn render_fields(record: &BillRecord, contract: &HeaderContract) -> Vec<String> {
    Column::ALL
        .iter()
        .map(|column| match column {
            Column::Date => record.date.format("%Y-%m-%d").to_string(),
            Column::Amount => record.amount.to_string(),
            Column::Kind => contract.kind_label(record.kind).to_string(),
            Column::Category => record.category.clone(),
            Column::Description => record.description.clone(),
            Column::Account => record.account.clone(),
        })
        .collect()
}

/// Why a rendered field would not read back unchanged, if it would not
fn unreadable_reason(column: Column, field: &str) -> Option<&'static str> {
    if field.contains(QUOTE) {
        Some("contains a double quote")
    } else if field.contains('\n') {
        Some("contains a line break")
    } else if field.trim() != field {
        Some("has leading or trailing whitespace")
    } else if column == Column::Date && !is_date_shaped(field) {
        Some("is not a YYYY-MM-DD date")
    } else {
        None
    }
}

/// Refuse a record the importer could not read back
fn check_fields(position: usize, fields: &[String], contract: &HeaderContract) -> BillResult<()> {
    for (column, field) in Column::ALL.into_iter().zip(fields) {
        if let Some(reason) = unreadable_reason(column, field) {
            return Err(BillError::Export(format!(
                "record {}: {} {}",
                position,
                contract.label(column),
                reason
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{ImportOptions, ImportService};
    use crate::models::{BillKind, Money};
    use chrono::NaiveDate;

    fn records() -> Vec<BillRecord> {
        vec![
            BillRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                Money::parse("100.00").unwrap(),
                BillKind::Expense,
                "餐饮",
                "午餐",
            )
            .with_account("现金"),
            BillRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
                Money::parse("2000.50").unwrap(),
                BillKind::Income,
                "工资",
                "月薪",
            ),
        ]
    }

    #[test]
    fn test_human_export() {
        let text = export_records(&records(), &ExportOptions::new()).unwrap();
        assert_eq!(
            text,
            "日期,金额,类型,分类,描述,账户\n\
             2024-01-15,100.00,支出,餐饮,午餐,现金\n\
             2024-01-16,2000.50,收入,工资,月薪,"
        );
    }

    #[test]
    fn test_machine_export() {
        let text = export_records(&records(), &ExportOptions::machine()).unwrap();
        assert_eq!(
            text,
            "date,amount,kind,category,description,account\n\
             2024-01-15,100.00,expense,餐饮,午餐,现金\n\
             2024-01-16,2000.50,income,工资,月薪,"
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let text = export_records(&[], &ExportOptions::machine()).unwrap();
        assert_eq!(text, "date,amount,kind,category,description,account");
    }

    #[test]
    fn test_preserves_caller_order() {
        let mut reversed = records();
        reversed.reverse();
        let text = export_records(&reversed, &ExportOptions::machine()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[1].starts_with("2024-01-16"));
        assert!(lines[2].starts_with("2024-01-15"));
    }

    #[test]
    fn test_bom() {
        let text = export_records(&records(), &ExportOptions::new().with_bom(true)).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert!(text[BOM.len_utf8()..].starts_with("日期"));
    }

    #[test]
    fn test_field_with_delimiter_is_quoted() {
        let mut bills = records();
        bills[0].description = "lunch, with team".into();
        let text = export_records(&bills, &ExportOptions::machine()).unwrap();
        assert!(text.contains("\"lunch, with team\""));
    }

    #[test]
    fn test_line_break_in_field_refused() {
        let mut bills = records();
        bills[1].description = "line one\nline two".into();

        let err = export_records(&bills, &ExportOptions::machine()).unwrap_err();
        assert_eq!(
            err,
            BillError::Export("record 2: description contains a line break".into())
        );
    }

    #[test]
    fn test_quote_in_field_refused() {
        let mut bills = records();
        bills[0].category = "say \"hi\"".into();

        let err = export_records(&bills, &ExportOptions::new()).unwrap_err();
        assert_eq!(
            err,
            BillError::Export("record 1: 分类 contains a double quote".into())
        );
    }

    #[test]
    fn test_padded_field_refused() {
        let mut bills = records();
        bills[0].account = " 现金".into();
        assert!(matches!(
            export_records(&bills, &ExportOptions::machine()),
            Err(BillError::Export(_))
        ));

        let mut bills = records();
        bills[0].description = "午餐\r".into();
        assert!(matches!(
            export_records(&bills, &ExportOptions::machine()),
            Err(BillError::Export(_))
        ));
    }

    #[test]
    fn test_out_of_range_year_refused() {
        let mut bills = records();
        bills[0].date = NaiveDate::from_ymd_opt(12024, 1, 15).unwrap();

        let err = export_records(&bills, &ExportOptions::machine()).unwrap_err();
        assert_eq!(
            err,
            BillError::Export("record 1: date is not a YYYY-MM-DD date".into())
        );
    }

    #[test]
    fn test_refused_record_writes_nothing() {
        let mut bills = records();
        bills[1].description = "two\nlines".into();

        let mut out = Vec::new();
        assert!(export_to_writer(&bills, &ExportOptions::machine(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_round_trip_precise_amounts() {
        let mut bills = records();
        bills[0].amount = Money::parse("0.001").unwrap();
        bills[1].amount = Money::parse("1.239").unwrap();

        let text = export_records(&bills, &ExportOptions::machine()).unwrap();
        assert!(text.contains(",0.001,"));
        assert!(text.contains(",1.239,"));

        let result = ImportService::default().import_str(&text);
        assert_eq!(result.failed_count, 0);
        assert_eq!(result.records, bills);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let options = ExportOptions::machine().with_delimiter('，');
        assert!(matches!(
            export_records(&records(), &options),
            Err(BillError::Export(_))
        ));
    }

    #[test]
    fn test_export_to_writer() {
        let mut out = Vec::new();
        export_to_writer(&records(), &ExportOptions::machine(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("date,amount"));
    }

    #[test]
    fn test_round_trip_machine_header() {
        let mut bills = records();
        bills[1].description = "bonus, Q1".into();

        for delimiter in [',', ';', '\t'] {
            let text = export_records(
                &bills,
                &ExportOptions::machine().with_delimiter(delimiter).with_bom(true),
            )
            .unwrap();
            let result = ImportService::new(ImportOptions::new().with_delimiter(delimiter))
                .import_str(&text);

            assert_eq!(result.imported_count, bills.len());
            assert_eq!(result.failed_count, 0);
            assert_eq!(result.records, bills);
        }
    }

    #[test]
    fn test_round_trip_human_header() {
        let bills = records();
        let text = export_records(&bills, &ExportOptions::new()).unwrap();

        // The human header is not the machine contract
        let machine = ImportService::default().import_str(&text);
        assert!(machine.missing_columns().is_some());

        let human = ImportService::new(ImportOptions::new().with_header(HeaderStyle::Human))
            .import_str(&text);
        assert_eq!(human.imported_count, 2);
        assert_eq!(human.records, bills);
    }

    #[test]
    fn test_round_trip_after_relabelling_header() {
        let bills = records();
        let text = export_records(&bills, &ExportOptions::new()).unwrap();

        let human = HeaderContract::human();
        let machine = HeaderContract::machine();
        let (_, body) = text.split_once('\n').unwrap();
        let relabelled = format!("{}\n{}", machine.labels().join(","), body);
        assert_eq!(human.labels().len(), machine.labels().len());

        let result = ImportService::default().import_str(&relabelled);
        assert_eq!(result.imported_count, 2);
        assert_eq!(result.failed_count, 0);
        assert_eq!(result.records, bills);
    }
}
