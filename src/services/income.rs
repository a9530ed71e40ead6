//! Income service

use chrono::NaiveDate;
use tracing::info;

use super::check_account_reference;
use crate::error::{PaycheckError, PaycheckResult};
use crate::forms::IncomeForm;
use crate::models::{Income, IncomeId};
use crate::reports::totals;
use crate::storage::Storage;

pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, form: &IncomeForm) -> PaycheckResult<Income> {
        self.add(form.parse()?)
    }

    pub fn add(&self, income: Income) -> PaycheckResult<Income> {
        income
            .validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        check_account_reference(self.storage, "Income", &income.name, &income.bank_account)?;

        let income = self.storage.incomes.add(income)?;
        info!(
            id = %income.id,
            name = %income.name,
            due = %income.due_date,
            amount = %income.amount_this_month,
            "income added"
        );
        Ok(income)
    }

    pub fn list(&self) -> PaycheckResult<Vec<Income>> {
        self.storage.incomes.all()
    }

    /// The earliest-due income; ties go to the one added first
    pub fn next(&self) -> PaycheckResult<Option<Income>> {
        let incomes = self.list()?;
        Ok(totals::next_income(&incomes).cloned())
    }

    /// Days from `today` to the next income, 0 when none is recorded
    pub fn days_until_next(&self, today: NaiveDate) -> PaycheckResult<i64> {
        Ok(totals::days_until_next_income(&self.list()?, today))
    }

    pub fn find(&self, identifier: &str) -> PaycheckResult<Option<Income>> {
        if let Some(income) = self.storage.incomes.find_by_name(identifier)? {
            return Ok(Some(income));
        }
        match identifier.parse::<IncomeId>() {
            Ok(id) => self.storage.incomes.find_by_id(id),
            Err(_) => Ok(None),
        }
    }

    pub fn require(&self, identifier: &str) -> PaycheckResult<Income> {
        self.find(identifier)?
            .ok_or_else(|| PaycheckError::income_not_found(identifier))
    }
}
