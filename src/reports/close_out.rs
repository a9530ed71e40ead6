//! Close-out report
//!
//! The real balance minus every bill that falls due before the next
//! paycheck.

use chrono::NaiveDate;
use serde::Serialize;

use super::paycheck::truncate;
use super::projection::{bills_due_by, Projection};
use crate::models::{Bill, Money};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Serialize)]
pub struct CloseOutReport {
    pub real_balance: Money,
    /// Next paycheck date; `None` closes out every bill
    pub boundary: Option<NaiveDate>,
    pub bills_due: Vec<Bill>,
    pub total_bills_due: Money,
    pub closing_balance: Money,
}

impl CloseOutReport {
    pub fn generate(snapshot: &Snapshot) -> Self {
        let projection = Projection::compute(snapshot);
        let bills_due = bills_due_by(&snapshot.bills, projection.boundary)
            .into_iter()
            .cloned()
            .collect();

        Self {
            real_balance: projection.real_balance,
            boundary: projection.boundary,
            bills_due,
            total_bills_due: projection.bills_due_before_paycheck,
            closing_balance: projection.closing_balance,
        }
    }

    pub fn is_in_good_shape(&self) -> bool {
        !self.closing_balance.is_negative()
    }

    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Close Out\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "Real Bank Balance: {:>12}\n",
            self.real_balance.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Bills Due:         {:>12}\n",
            format!("-{}", self.total_bills_due.format_with_symbol(currency))
        ));
        output.push_str(&"-".repeat(32));
        output.push('\n');
        output.push_str(&format!(
            "Closing Balance:   {:>12}\n",
            self.closing_balance.format_with_symbol(currency)
        ));
        output.push('\n');

        match self.boundary {
            Some(date) => output.push_str(&format!(
                "Bills due before next paycheck ({}):\n",
                date.format(date_format)
            )),
            None => output.push_str("No paycheck scheduled; every bill is included:\n"),
        }
        if self.bills_due.is_empty() {
            output.push_str("  (none)\n");
        }
        for bill in &self.bills_due {
            output.push_str(&format!(
                "  {:<28} {:>12}\n",
                truncate(&bill.name, 28),
                format!("-{}", bill.amount_this_month.format_with_symbol(currency))
            ));
        }
        output.push('\n');

        if self.is_in_good_shape() {
            output.push_str(&format!(
                "You're in good shape! You'll have {} remaining after all bills are paid.\n",
                self.closing_balance.format_with_symbol(currency)
            ));
        } else {
            output.push_str(&format!(
                "Caution: You're short by {}. Consider adjusting your spending or payment schedule.\n",
                self.closing_balance.abs().format_with_symbol(currency)
            ));
        }

        output
    }
}
