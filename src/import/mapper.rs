//! Row mapping
//!
//! Aligns a header row with a value row and produces a `BillDraft`. Mapping
//! never fails: absent values default to empty text and malformed amounts
//! become zero, leaving rejection to the validator.

use crate::models::{BillKind, Column, HeaderContract, Money};

/// A row that has been mapped but not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDraft {
    /// Date text as it appeared in the file
    pub date: String,
    /// Parsed amount (zero when malformed or absent)
    pub amount: Money,
    pub kind: BillKind,
    pub category: String,
    pub description: String,
    pub account: String,
}

/// Map a value row onto the columns named by the header row
///
/// `header[i]` names the role of `values[i]`; extra cells on either side are
/// ignored, as are header names the contract does not know. When a column
/// name repeats, the rightmost cell wins.
pub fn map_row<H, V>(header: &[H], values: &[V], contract: &HeaderContract) -> BillDraft
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    let mut draft = BillDraft::default();

    for (name, value) in header.iter().zip(values) {
        let value = value.as_ref();
        match contract.column_for(name.as_ref()) {
            Some(Column::Date) => draft.date = value.to_string(),
            Some(Column::Amount) => draft.amount = Money::parse_or_zero(value),
            Some(Column::Kind) => draft.kind = BillKind::from_label(value),
            Some(Column::Category) => draft.category = value.to_string(),
            Some(Column::Description) => draft.description = value.to_string(),
            Some(Column::Account) => draft.account = value.to_string(),
            None => {}
        }
    }

    draft
}
