//! Record validation
//!
//! Turns a `BillDraft` into a `BillRecord` or rejects it. Acceptance is all or
//! nothing; the failure only names the first rule that did not hold.
//!
//! Dates are stricter than the bare `YYYY-MM-DD` shape: records store a
//! `NaiveDate`, so text such as `2024-02-30` that matches the pattern but
//! names no real day is rejected with `ImpossibleDate`. Amounts are judged
//! on their exact decimal value, so `0.001` passes.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use super::mapper::BillDraft;
use crate::models::{BillRecord, Money};

/// Why a draft was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("date is empty")]
    MissingDate,

    #[error("description is empty")]
    MissingDescription,

    #[error("amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),

    #[error("category is empty")]
    MissingCategory,

    #[error("date '{0}' is not in YYYY-MM-DD format")]
    MalformedDate(String),

    #[error("date '{0}' is not a calendar date")]
    ImpossibleDate(String),
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"))
}

/// Check that text is exactly `YYYY-MM-DD` with zero-padded month and day
pub fn is_date_shaped(text: &str) -> bool {
    date_pattern().is_match(text)
}

/// Validate a draft, producing a typed record
pub fn validate(draft: BillDraft) -> Result<BillRecord, ValidationFailure> {
    if draft.date.is_empty() {
        return Err(ValidationFailure::MissingDate);
    }
    if draft.description.is_empty() {
        return Err(ValidationFailure::MissingDescription);
    }
    if !draft.amount.is_positive() {
        return Err(ValidationFailure::NonPositiveAmount(draft.amount));
    }
    if draft.category.is_empty() {
        return Err(ValidationFailure::MissingCategory);
    }
    if !is_date_shaped(&draft.date) {
        return Err(ValidationFailure::MalformedDate(draft.date));
    }

    let date = match NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return Err(ValidationFailure::ImpossibleDate(draft.date)),
    };

    Ok(BillRecord {
        date,
        amount: draft.amount,
        kind: draft.kind,
        category: draft.category,
        description: draft.description,
        account: draft.account,
    })
}
