//! Shared enumerations and constants for transaction records.
//!
//! This module defines the vocabulary used across the tracker: the two
//! transaction kinds, the supported statistics views, the date patterns for
//! input and display, and the amount ceiling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pattern accepted for the `d/` tag, e.g. `31102022` for 31 Oct 2022.
pub const DATE_INPUT_PATTERN: &str = "%d%m%Y";

/// Pattern used when printing dates back to the user.
pub const DATE_DISPLAY_PATTERN: &str = "%d %b %Y";

/// Largest amount a single transaction may carry.
pub const MAX_AMOUNT: u32 = 10_000_000;

/// The two kinds of transaction the tracker records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Canonical name as typed after the `t/` tag.
    pub const fn name(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }

    /// Sign shown in list output: `-` for expenses, `+` for income.
    pub const fn sign(self) -> char {
        match self {
            TransactionKind::Expense => '-',
            TransactionKind::Income => '+',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Statistics views the `stats` command can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsType {
    /// Entry counts and net totals grouped by category.
    Categories,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_canonical() {
        assert_eq!(TransactionKind::Expense.name(), "expense");
        assert_eq!(TransactionKind::Income.name(), "income");
    }

    #[test]
    fn kind_serialises_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
        let back: TransactionKind = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(back, TransactionKind::Income);
    }
}
