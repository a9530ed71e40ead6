//! Income model
//!
//! A scheduled payment into one of the accounts, with the amount expected
//! this month and next.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NegativeAmount,
    EmptyBankAccount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expected income cannot be negative"),
            Self::EmptyBankAccount => write!(f, "Income must name a bank account"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A scheduled income payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub name: String,
    pub amount_this_month: Money,
    pub amount_next_month: Money,
    /// When the payment lands
    pub due_date: NaiveDate,
    pub bank_account: String,
}

impl Income {
    pub fn new(
        name: impl Into<String>,
        amount_this_month: Money,
        amount_next_month: Money,
        due_date: NaiveDate,
        bank_account: impl Into<String>,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            name: name.into(),
            amount_this_month,
            amount_next_month,
            due_date,
            bank_account: bank_account.into(),
        }
    }

    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if self.amount_this_month.is_negative() || self.amount_next_month.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.bank_account.trim().is_empty() {
            return Err(IncomeValidationError::EmptyBankAccount);
        }
        Ok(())
    }
}
