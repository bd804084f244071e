//! Bill record model
//!
//! A `BillRecord` is one validated transaction line. Records only come out of
//! the validator or are built directly by callers that want to export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Localized label for income in bill files
pub const INCOME_ALIAS: &str = "收入";

/// Localized label for expense in bill files
pub const EXPENSE_ALIAS: &str = "支出";

/// Direction of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillKind {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
}

impl BillKind {
    /// Resolve a kind from a file label
    ///
    /// Only "income" and its localized alias map to `Income`; every other
    /// token, including an empty one, is an expense.
    pub fn from_label(label: &str) -> Self {
        match label {
            "income" | INCOME_ALIAS => Self::Income,
            _ => Self::Expense,
        }
    }

    /// Canonical machine tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Localized label used in human-facing exports
    pub fn human_label(&self) -> &'static str {
        match self {
            Self::Income => INCOME_ALIAS,
            Self::Expense => EXPENSE_ALIAS,
        }
    }
}

impl fmt::Display for BillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A validated bill (transaction line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRecord {
    /// Calendar date of the bill
    pub date: NaiveDate,

    /// Amount, always positive for records that passed validation
    pub amount: Money,

    /// Income or expense
    pub kind: BillKind,

    /// Category label
    pub category: String,

    /// Free-text description
    pub description: String,

    /// Account the bill was paid from or into (empty when unknown)
    #[serde(default)]
    pub account: String,
}

impl BillRecord {
    /// Create a new record without an account
    pub fn new(
        date: NaiveDate,
        amount: Money,
        kind: BillKind,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            kind,
            category: category.into(),
            description: description.into(),
            account: String::new(),
        }
    }

    /// Set the account
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }
}

impl fmt::Display for BillRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} - {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category,
            self.description
        )
    }
}
