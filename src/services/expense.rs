//! Expense service
//!
//! Expenses are spending already made against an account since its balance
//! was recorded ("coasted" spending).

use tracing::info;

use super::check_account_reference;
use crate::error::{PaycheckError, PaycheckResult};
use crate::forms::ExpenseForm;
use crate::models::{Expense, ExpenseId, Money};
use crate::reports::totals;
use crate::storage::Storage;

pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, form: &ExpenseForm) -> PaycheckResult<Expense> {
        self.add(form.parse()?)
    }

    pub fn add(&self, expense: Expense) -> PaycheckResult<Expense> {
        expense
            .validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        check_account_reference(self.storage, "Expense", &expense.name, &expense.bank_account)?;

        let expense = self.storage.expenses.add(expense)?;
        info!(
            id = %expense.id,
            name = %expense.name,
            account = %expense.bank_account,
            amount = %expense.amount,
            "expense added"
        );
        Ok(expense)
    }

    pub fn list(&self) -> PaycheckResult<Vec<Expense>> {
        self.storage.expenses.all()
    }

    /// Newest first; equal dates keep insertion order
    pub fn list_recent(&self) -> PaycheckResult<Vec<Expense>> {
        let mut expenses = self.list()?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Coasted total per bank account, in first-seen order
    pub fn by_account(&self) -> PaycheckResult<Vec<(String, Money)>> {
        Ok(totals::expenses_by_account(&self.list()?))
    }

    pub fn find(&self, identifier: &str) -> PaycheckResult<Option<Expense>> {
        if let Some(expense) = self.storage.expenses.find_by_name(identifier)? {
            return Ok(Some(expense));
        }
        match identifier.parse::<ExpenseId>() {
            Ok(id) => self.storage.expenses.find_by_id(id),
            Err(_) => Ok(None),
        }
    }

    pub fn require(&self, identifier: &str) -> PaycheckResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| PaycheckError::expense_not_found(identifier))
    }
}
