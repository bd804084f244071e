//! Core data models for bill-sync
//!
//! This module contains the data structures shared by import and export:
//! bill records, money amounts and the header contracts that name columns.

pub mod header;
pub mod money;
pub mod record;

pub use header::{Column, HeaderContract, HeaderStyle};
pub use money::{Money, MoneyParseError};
pub use record::{BillKind, BillRecord, EXPENSE_ALIAS, INCOME_ALIAS};
