//! Header contracts
//!
//! A bill file names its columns in the first line. Machine-facing files use
//! the canonical field names; human-facing exports use localized labels. Both
//! are modelled as a `HeaderContract` so import and export can use either.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::BillKind;

/// Semantic role of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Amount,
    Kind,
    Category,
    Description,
    Account,
}

impl Column {
    /// All columns in export order
    pub const ALL: [Column; 6] = [
        Column::Date,
        Column::Amount,
        Column::Kind,
        Column::Category,
        Column::Description,
        Column::Account,
    ];

    /// Whether an import document must declare this column
    pub fn is_required(&self) -> bool {
        !matches!(self, Column::Account)
    }

    fn index(&self) -> usize {
        match self {
            Column::Date => 0,
            Column::Amount => 1,
            Column::Kind => 2,
            Column::Category => 3,
            Column::Description => 4,
            Column::Account => 5,
        }
    }
}

/// Which header contract to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Canonical field names (`date`, `amount`, ...)
    #[default]
    Machine,
    /// Localized labels (`日期`, `金额`, ...)
    Human,
}

impl HeaderStyle {
    pub fn contract(&self) -> HeaderContract {
        match self {
            Self::Machine => HeaderContract::machine(),
            Self::Human => HeaderContract::human(),
        }
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Machine => write!(f, "machine"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// A named set of column labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContract {
    style: HeaderStyle,
    labels: [&'static str; 6],
}

impl HeaderContract {
    /// Canonical field names
    pub const fn machine() -> Self {
        Self {
            style: HeaderStyle::Machine,
            labels: ["date", "amount", "kind", "category", "description", "account"],
        }
    }

    /// Localized labels used by human-facing exports
    pub const fn human() -> Self {
        Self {
            style: HeaderStyle::Human,
            labels: ["日期", "金额", "类型", "分类", "描述", "账户"],
        }
    }

    pub fn style(&self) -> HeaderStyle {
        self.style
    }

    /// Label of a column under this contract
    pub fn label(&self, column: Column) -> &'static str {
        self.labels[column.index()]
    }

    /// All labels in export order
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Resolve a header name to its column (case-sensitive)
    pub fn column_for(&self, name: &str) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|column| self.label(*column) == name)
    }

    /// Labels of the columns an import document must declare
    pub fn required_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        Column::ALL
            .into_iter()
            .filter(Column::is_required)
            .map(move |column| self.label(column))
    }

    /// Required labels absent from a header row, in contract order
    pub fn missing_from<S: AsRef<str>>(&self, header: &[S]) -> Vec<String> {
        self.required_labels()
            .filter(|label| !header.iter().any(|h| h.as_ref() == *label))
            .map(str::to_string)
            .collect()
    }

    /// How a kind is written under this contract
    pub fn kind_label(&self, kind: BillKind) -> &'static str {
        match self.style {
            HeaderStyle::Machine => kind.as_str(),
            HeaderStyle::Human => kind.human_label(),
        }
    }
}

impl Default for HeaderContract {
    fn default() -> Self {
        Self::machine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_labels() {
        let required: Vec<_> = HeaderContract::machine().required_labels().collect();
        assert_eq!(required, ["date", "amount", "kind", "category", "description"]);

        let required: Vec<_> = HeaderContract::human().required_labels().collect();
        assert_eq!(required, ["日期", "金额", "类型", "分类", "描述"]);
    }

    #[test]
    fn test_missing_from_is_order_independent() {
        let contract = HeaderContract::machine();
        let header = ["description", "category", "kind", "amount", "date"];
        assert!(contract.missing_from(&header[..]).is_empty());
    }

    #[test]
    fn test_missing_from_is_case_sensitive() {
        let contract = HeaderContract::machine();
        let header = ["date", "Amount", "kind", "category", "description"];
        assert_eq!(contract.missing_from(&header[..]), vec!["amount".to_string()]);
    }

    #[test]
    fn test_column_for() {
        let human = HeaderContract::human();
        assert_eq!(human.column_for("金额"), Some(Column::Amount));
        assert_eq!(human.column_for("amount"), None);
        assert_eq!(HeaderContract::machine().column_for("account"), Some(Column::Account));
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(HeaderContract::machine().kind_label(BillKind::Income), "income");
        assert_eq!(HeaderContract::human().kind_label(BillKind::Income), "收入");
        assert_eq!(HeaderContract::human().kind_label(BillKind::Expense), "支出");
    }
}
