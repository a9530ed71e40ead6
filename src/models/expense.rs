//! Coasting expense model
//!
//! An unplanned daily spend logged between paychecks. It lowers the real
//! balance without touching the stored account balance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub bank_account: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        bank_account: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            bank_account: bank_account.into(),
            amount,
            date,
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.bank_account.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyBankAccount);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount,
    EmptyBankAccount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::EmptyBankAccount => write!(f, "Expense must name a bank account"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
