//! Entity store for paycheck-cli
//!
//! `Storage` is created by the application root and passed by reference to
//! services and reports. It holds one append-only repository per entity
//! kind and can optionally be backed by a JSON session file.

pub mod file_io;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use repository::{Entity, Repository};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PaycheckResult;
use crate::models::{Account, Bill, Expense, Income};

/// A consistent point-in-time copy of every collection
///
/// Also the on-disk layout of the session file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub bills: Vec<Bill>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// Owner of all entity collections
#[derive(Debug, Default)]
pub struct Storage {
    session_file: Option<PathBuf>,
    pub accounts: Repository<Account>,
    pub bills: Repository<Bill>,
    pub incomes: Repository<Income>,
    pub expenses: Repository<Expense>,
}

impl Storage {
    /// An empty store that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a store backed by `path`; a missing file yields an empty store
    pub fn open(path: impl Into<PathBuf>) -> PaycheckResult<Self> {
        let path = path.into();
        let data: Snapshot = read_json(&path)?;

        debug!(
            accounts = data.accounts.len(),
            bills = data.bills.len(),
            incomes = data.incomes.len(),
            expenses = data.expenses.len(),
            "session loaded"
        );

        Ok(Self {
            session_file: Some(path),
            accounts: Repository::from_items(data.accounts),
            bills: Repository::from_items(data.bills),
            incomes: Repository::from_items(data.incomes),
            expenses: Repository::from_items(data.expenses),
        })
    }

    pub fn session_file(&self) -> Option<&Path> {
        self.session_file.as_deref()
    }

    /// Copy every collection while holding all read locks at once
    ///
    /// Writers only ever lock a single collection, so no append can land
    /// between the copies.
    pub fn snapshot(&self) -> PaycheckResult<Snapshot> {
        let accounts = self.accounts.read()?;
        let bills = self.bills.read()?;
        let incomes = self.incomes.read()?;
        let expenses = self.expenses.read()?;

        Ok(Snapshot {
            accounts: accounts.clone(),
            bills: bills.clone(),
            incomes: incomes.clone(),
            expenses: expenses.clone(),
        })
    }

    /// Persist to the session file; a no-op for in-memory stores
    pub fn save(&self) -> PaycheckResult<()> {
        match &self.session_file {
            Some(path) => write_json_atomic(path, &self.snapshot()?),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_save_is_noop() {
        let storage = Storage::in_memory();
        storage
            .accounts
            .add(Account::new("Checking", AccountType::Checking, Money::zero()))
            .unwrap();
        assert!(storage.session_file().is_none());
        storage.save().unwrap();
    }

    #[test]
    fn test_snapshot_reflects_every_collection() {
        let storage = Storage::in_memory();
        storage
            .accounts
            .add(Account::new("Checking", AccountType::Checking, Money::from_cents(100)))
            .unwrap();
        storage
            .expenses
            .add(Expense::new(
                "Coffee",
                "Checking",
                Money::from_cents(550),
                NaiveDate::from_ymd_opt(2025, 10, 16).unwrap(),
            ))
            .unwrap();

        let snapshot = storage.snapshot().unwrap();
        assert_eq!(snapshot.accounts.len(), 1);
        assert_eq!(snapshot.expenses.len(), 1);
        assert!(snapshot.bills.is_empty());
        assert!(snapshot.incomes.is_empty());
    }

    #[test]
    fn test_open_save_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("session.json");

        let storage = Storage::open(&path).unwrap();
        let stored = storage
            .accounts
            .add(Account::new("Savings", AccountType::Savings, Money::from_cents(875000)))
            .unwrap();
        storage.save().unwrap();

        let reopened = Storage::open(&path).unwrap();
        assert_eq!(reopened.accounts.all().unwrap(), vec![stored]);
        assert_eq!(reopened.session_file(), Some(path.as_path()));
    }
}
