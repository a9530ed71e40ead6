//! Bill service

use tracing::info;

use super::check_account_reference;
use crate::error::{PaycheckError, PaycheckResult};
use crate::forms::BillForm;
use crate::models::{Bill, BillId};
use crate::storage::Storage;

pub struct BillService<'a> {
    storage: &'a Storage,
}

impl<'a> BillService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, form: &BillForm) -> PaycheckResult<Bill> {
        self.add(form.parse()?)
    }

    /// Validate and append a bill
    ///
    /// An unknown `bank_account` is logged, not rejected.
    pub fn add(&self, bill: Bill) -> PaycheckResult<Bill> {
        bill.validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        check_account_reference(self.storage, "Bill", &bill.name, &bill.bank_account)?;

        let bill = self.storage.bills.add(bill)?;
        info!(
            id = %bill.id,
            name = %bill.name,
            due = %bill.due_date,
            amount = %bill.amount_this_month,
            "bill added"
        );
        Ok(bill)
    }

    /// All bills in insertion order
    pub fn list(&self) -> PaycheckResult<Vec<Bill>> {
        self.storage.bills.all()
    }

    /// Bills whose payment still has to be set up
    pub fn needing_attention(&self) -> PaycheckResult<Vec<Bill>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|b| b.status.needs_attention())
            .collect())
    }

    pub fn find(&self, identifier: &str) -> PaycheckResult<Option<Bill>> {
        if let Some(bill) = self.storage.bills.find_by_name(identifier)? {
            return Ok(Some(bill));
        }
        match identifier.parse::<BillId>() {
            Ok(id) => self.storage.bills.find_by_id(id),
            Err(_) => Ok(None),
        }
    }

    pub fn require(&self, identifier: &str) -> PaycheckResult<Bill> {
        self.find(identifier)?
            .ok_or_else(|| PaycheckError::bill_not_found(identifier))
    }
}
