//! Transaction data structure.
//!
//! This module defines the core `Transaction` struct: one income or expense
//! entry with its description, category, whole-unit amount and date.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{TransactionKind, DATE_DISPLAY_PATTERN};

/// A single recorded income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: u32,
    pub category: String,
    pub date: NaiveDate,
}

impl fmt::Display for Transaction {
    /// List-line rendering, e.g. `[-] lunch | Food | $15 | 31 Oct 2022`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | ${} | {}",
            self.kind.sign(),
            self.description,
            self.category,
            self.amount,
            self.date.format(DATE_DISPLAY_PATTERN)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            kind: TransactionKind::Expense,
            description: "lunch".to_string(),
            amount: 15,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 10, 31).unwrap(),
        }
    }

    #[test]
    fn display_line_format() {
        assert_eq!(sample().to_string(), "[-] lunch | Food | $15 | 31 Oct 2022");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
