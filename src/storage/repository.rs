//! Append-only typed collections
//!
//! One `Repository<T>` per entity kind. Each wraps its items in an `RwLock`,
//! so appends are serialized and a reader never sees a half-applied append.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{PaycheckError, PaycheckResult};
use crate::models::{Account, AccountId, Bill, BillId, Expense, ExpenseId, Income, IncomeId};

/// An entity that can live in a [`Repository`]
pub trait Entity: Clone {
    type Id: Copy + Eq + std::fmt::Display;

    /// Human-readable kind, used in error messages
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    fn name(&self) -> &str;

    /// Whether a free-text reference names this entity, ignoring case and
    /// surrounding space
    fn matches_name(&self, reference: &str) -> bool {
        self.name().trim().eq_ignore_ascii_case(reference.trim())
    }
}

impl Entity for Account {
    type Id = AccountId;
    const KIND: &'static str = "Account";

    fn id(&self) -> AccountId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Bill {
    type Id = BillId;
    const KIND: &'static str = "Bill";

    fn id(&self) -> BillId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Income {
    type Id = IncomeId;
    const KIND: &'static str = "Income";

    fn id(&self) -> IncomeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Expense {
    type Id = ExpenseId;
    const KIND: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Insertion-ordered, append-only collection
#[derive(Debug)]
pub struct Repository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository with previously stored items, keeping their order
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Append an entity and return the stored copy
    pub fn add(&self, entity: T) -> PaycheckResult<T> {
        let mut items = self.write()?;

        if items.iter().any(|existing| existing.id() == entity.id()) {
            return Err(PaycheckError::Duplicate {
                entity_type: T::KIND,
                identifier: entity.id().to_string(),
            });
        }

        items.push(entity.clone());
        Ok(entity)
    }

    /// Every entity, in insertion order
    pub fn all(&self) -> PaycheckResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    pub fn find_by_id(&self, id: T::Id) -> PaycheckResult<Option<T>> {
        Ok(self.read()?.iter().find(|e| e.id() == id).cloned())
    }

    /// First entity whose name matches, ignoring case and surrounding space
    pub fn find_by_name(&self, name: &str) -> PaycheckResult<Option<T>> {
        Ok(self
            .read()?
            .iter()
            .find(|e| e.matches_name(name))
            .cloned())
    }

    pub fn len(&self) -> PaycheckResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> PaycheckResult<bool> {
        Ok(self.read()?.is_empty())
    }

    pub(crate) fn read(&self) -> PaycheckResult<RwLockReadGuard<'_, Vec<T>>> {
        self.items.read().map_err(|e| {
            PaycheckError::Storage(format!("Failed to acquire {} read lock: {}", T::KIND, e))
        })
    }

    fn write(&self) -> PaycheckResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.items.write().map_err(|e| {
            PaycheckError::Storage(format!("Failed to acquire {} write lock: {}", T::KIND, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, Money};

    fn account(name: &str, cents: i64) -> Account {
        Account::new(name, AccountType::Checking, Money::from_cents(cents))
    }

    #[test]
    fn test_add_returns_stored_entity() {
        let repo = Repository::new();
        let checking = account("Checking", 245050);

        let stored = repo.add(checking.clone()).unwrap();
        assert_eq!(stored, checking);
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let repo = Repository::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            repo.add(account(name, 0)).unwrap();
        }

        let names: Vec<_> = repo
            .all()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let repo = Repository::new();
        let checking = account("Checking", 0);
        repo.add(checking.clone()).unwrap();

        let err = repo.add(checking).unwrap_err();
        assert!(matches!(err, PaycheckError::Duplicate { entity_type: "Account", .. }));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn test_find_by_id_and_name() {
        let repo = Repository::new();
        let savings = repo.add(account("Savings Account", 875000)).unwrap();
        repo.add(account("Checking", 0)).unwrap();

        assert_eq!(repo.find_by_id(savings.id).unwrap(), Some(savings.clone()));
        assert_eq!(repo.find_by_id(AccountId::new()).unwrap(), None);
        assert_eq!(
            repo.find_by_name(" savings account").unwrap().map(|a| a.id),
            Some(savings.id)
        );
        assert!(repo.find_by_name("Brokerage").unwrap().is_none());
    }

    #[test]
    fn test_matches_name() {
        let checking = account("Checking", 0);
        assert!(checking.matches_name("checking "));
        assert!(checking.matches_name(" CHECKING"));
        assert!(!checking.matches_name("Savings"));
    }

    #[test]
    fn test_empty_repository() {
        let repo: Repository<Account> = Repository::new();
        assert!(repo.is_empty().unwrap());
        assert!(repo.all().unwrap().is_empty());
    }
}
