//! File-backed transaction store.
//!
//! This module provides the `Database` struct holding all recorded
//! transactions, JSON persistence, and the query helpers the commands need:
//! 1-based entry access, filtering for `list` and per-category totals for
//! `stats`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::TransactionKind;
use crate::transaction::Transaction;

/// In-memory store for all recorded transactions.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    pub transactions: Vec<Transaction>,
}

/// Running totals for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotal {
    pub entries: usize,
    /// Income minus expenses, in whole units.
    pub net: i64,
}

impl Database {
    /// Load the database from a JSON file, starting empty if the file
    /// doesn't exist or can't be read.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Database::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("Error parsing transaction file, starting fresh: {e}");
                    Database::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading transaction file, starting fresh: {e}");
                Database::default()
            }
        }
    }

    /// Save the database to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a transaction by its 1-based entry number as shown by `list`.
    pub fn entry(&self, number: i64) -> Option<&Transaction> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.transactions.get(index)
    }

    /// Get a mutable transaction by its 1-based entry number.
    pub fn entry_mut(&mut self, number: i64) -> Option<&mut Transaction> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.transactions.get_mut(index)
    }

    /// Remove and return the transaction at a 1-based entry number.
    pub fn remove_entry(&mut self, number: i64) -> Option<Transaction> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        if index >= self.transactions.len() {
            return None;
        }
        Some(self.transactions.remove(index))
    }

    /// Delete every transaction.
    pub fn purge(&mut self) {
        self.transactions.clear();
    }

    /// Transactions matching all of the given filters, paired with their
    /// 1-based entry numbers so the caller can print stable indices.
    pub fn filtered(
        &self,
        kind: Option<TransactionKind>,
        category: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<(usize, &Transaction)> {
        self.transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| kind.map_or(true, |k| t.kind == k))
            .filter(|(_, t)| category.map_or(true, |c| t.category == c))
            .filter(|(_, t)| date.map_or(true, |d| t.date == d))
            .map(|(i, t)| (i + 1, t))
            .collect()
    }

    /// Entry counts and signed net totals per category, category-sorted.
    ///
    /// Income counts positive and expenses negative, so a category's net
    /// reads as its contribution to savings.
    pub fn category_totals(&self) -> BTreeMap<&str, CategoryTotal> {
        let mut totals: BTreeMap<&str, CategoryTotal> = BTreeMap::new();
        for t in &self.transactions {
            let total = totals.entry(t.category.as_str()).or_default();
            total.entries += 1;
            let amount = i64::from(t.amount);
            total.net += match t.kind {
                TransactionKind::Income => amount,
                TransactionKind::Expense => -amount,
            };
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(kind: TransactionKind, category: &str, amount: u32, day: u32) -> Transaction {
        Transaction {
            kind,
            description: format!("{category} {day}"),
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2022, 10, day).unwrap(),
        }
    }

    fn sample_db() -> Database {
        let mut db = Database::default();
        db.add(transaction(TransactionKind::Expense, "Food", 20, 1));
        db.add(transaction(TransactionKind::Income, "Work", 3000, 2));
        db.add(transaction(TransactionKind::Expense, "Food", 35, 2));
        db
    }

    #[test]
    fn entry_numbers_are_one_based() {
        let db = sample_db();
        assert_eq!(db.entry(1).unwrap().amount, 20);
        assert_eq!(db.entry(3).unwrap().amount, 35);
        assert!(db.entry(0).is_none());
        assert!(db.entry(-2).is_none());
        assert!(db.entry(4).is_none());
    }

    #[test]
    fn remove_entry_shifts_later_entries() {
        let mut db = sample_db();
        let removed = db.remove_entry(2).unwrap();
        assert_eq!(removed.category, "Work");
        assert_eq!(db.len(), 2);
        assert_eq!(db.entry(2).unwrap().amount, 35);
        assert!(db.remove_entry(5).is_none());
    }

    #[test]
    fn purge_empties_the_store() {
        let mut db = sample_db();
        db.purge();
        assert!(db.is_empty());
    }

    #[test]
    fn filters_compose() {
        let db = sample_db();
        assert_eq!(db.filtered(None, None, None).len(), 3);

        let food = db.filtered(Some(TransactionKind::Expense), Some("Food"), None);
        assert_eq!(food.len(), 2);
        // Entry numbers refer to the unfiltered list.
        assert_eq!(food[0].0, 1);
        assert_eq!(food[1].0, 3);

        let on_day_two = db.filtered(None, None, NaiveDate::from_ymd_opt(2022, 10, 2));
        assert_eq!(on_day_two.len(), 2);

        assert!(db
            .filtered(Some(TransactionKind::Income), Some("Food"), None)
            .is_empty());
    }

    #[test]
    fn category_totals_are_signed_and_sorted() {
        let db = sample_db();
        let totals = db.category_totals();
        let keys: Vec<&&str> = totals.keys().collect();
        assert_eq!(keys, [&"Food", &"Work"]);
        assert_eq!(
            totals["Food"],
            CategoryTotal {
                entries: 2,
                net: -55
            }
        );
        assert_eq!(
            totals["Work"],
            CategoryTotal {
                entries: 1,
                net: 3000
            }
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir().join("moolah-db-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("transactions.json");
        let db = sample_db();
        db.save(&path).unwrap();
        let loaded = Database::load(&path);
        assert_eq!(loaded.transactions, db.transactions);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let db = Database::load(Path::new("/nonexistent/moolah/transactions.json"));
        assert!(db.is_empty());
    }
}
