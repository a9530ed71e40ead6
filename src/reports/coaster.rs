//! Coaster report
//!
//! Daily spending logged since the last paycheck and the real balance it
//! leaves behind.

use chrono::NaiveDate;
use serde::Serialize;

use super::paycheck::truncate;
use super::projection::Projection;
use super::totals;
use crate::models::{Expense, Money};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Serialize)]
pub struct AccountSpend {
    pub bank_account: String,
    pub amount: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoasterReport {
    pub today: NaiveDate,
    /// Sum of stored account balances
    pub starting_balance: Money,
    pub total_coasted: Money,
    /// Starting balance less everything coasted
    pub real_balance: Money,
    pub next_paycheck: Option<NaiveDate>,
    pub days_until_paycheck: i64,
    pub by_account: Vec<AccountSpend>,
    pub expenses: Vec<Expense>,
}

impl CoasterReport {
    pub fn generate(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let projection = Projection::compute(snapshot);

        Self {
            today,
            starting_balance: projection.total_balance,
            total_coasted: projection.total_expenses,
            real_balance: projection.real_balance,
            next_paycheck: projection.boundary,
            days_until_paycheck: totals::days_until_next_income(&snapshot.incomes, today),
            by_account: totals::expenses_by_account(&snapshot.expenses)
                .into_iter()
                .map(|(bank_account, amount)| AccountSpend {
                    bank_account,
                    amount,
                })
                .collect(),
            expenses: snapshot.expenses.clone(),
        }
    }

    /// Average that can still be spent per day before the paycheck lands
    pub fn daily_allowance(&self) -> Option<Money> {
        if self.days_until_paycheck <= 0 {
            return None;
        }
        Some(Money::from_cents(
            self.real_balance.cents() / self.days_until_paycheck,
        ))
    }

    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Coaster\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "Bank Balance:      {:>12}\n",
            self.starting_balance.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total Coasted:     {:>12}\n",
            format!("-{}", self.total_coasted.format_with_symbol(currency))
        ));
        output.push_str(&"-".repeat(32));
        output.push('\n');
        output.push_str(&format!(
            "Real Balance:      {:>12}\n",
            self.real_balance.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Until Paycheck:    {:>7} days\n",
            self.days_until_paycheck
        ));
        if let Some(allowance) = self.daily_allowance() {
            output.push_str(&format!(
                "Per Day:           {:>12}\n",
                allowance.format_with_symbol(currency)
            ));
        }
        output.push('\n');

        if self.expenses.is_empty() {
            output.push_str("Nothing coasted yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:<12} {:<14} {:>12}\n",
            "Expense", "Date", "Account", "Amount"
        ));
        output.push_str(&"-".repeat(65));
        output.push('\n');
        for expense in &self.expenses {
            output.push_str(&format!(
                "{:<24} {:<12} {:<14} {:>12}\n",
                truncate(&expense.name, 24),
                expense.date.format(date_format).to_string(),
                truncate(&expense.bank_account, 14),
                format!("-{}", expense.amount.format_with_symbol(currency)),
            ));
        }

        if self.by_account.len() > 1 {
            output.push('\n');
            output.push_str("By Account\n");
            for spend in &self.by_account {
                output.push_str(&format!(
                    "  {:<24} {:>12}\n",
                    truncate(&spend.bank_account, 24),
                    spend.amount.format_with_symbol(currency)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Income};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        let spent = date(2025, 10, 16);
        Snapshot {
            accounts: vec![Account::new(
                "Checking",
                AccountType::Checking,
                Money::from_cents(245050),
            )],
            expenses: vec![
                Expense::new("Coffee", "Checking", Money::from_cents(550), spent),
                Expense::new("Lunch", "Checking", Money::from_cents(1500), spent),
                Expense::new("Gas", "Credit Card", Money::from_cents(4500), date(2025, 10, 15)),
            ],
            incomes: vec![Income::new(
                "Salary",
                Money::from_cents(350000),
                Money::from_cents(350000),
                date(2025, 10, 25),
                "Checking",
            )],
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_generate() {
        let report = CoasterReport::generate(&snapshot(), date(2025, 10, 16));

        assert_eq!(report.total_coasted, Money::from_cents(6550));
        assert_eq!(report.real_balance, Money::from_cents(238500));
        assert_eq!(report.days_until_paycheck, 9);
        assert_eq!(report.by_account.len(), 2);
        assert_eq!(report.by_account[0].amount, Money::from_cents(2050));
    }

    #[test]
    fn test_daily_allowance() {
        let report = CoasterReport::generate(&snapshot(), date(2025, 10, 16));
        assert_eq!(report.daily_allowance(), Some(Money::from_cents(26500)));

        let no_income = Snapshot {
            incomes: Vec::new(),
            ..snapshot()
        };
        let report = CoasterReport::generate(&no_income, date(2025, 10, 16));
        assert_eq!(report.days_until_paycheck, 0);
        assert_eq!(report.daily_allowance(), None);
    }

    #[test]
    fn test_format_terminal() {
        let text = CoasterReport::generate(&snapshot(), date(2025, 10, 16))
            .format_terminal("$", "%Y-%m-%d");

        assert!(text.contains("-$65.50"));
        assert!(text.contains("$2385.00"));
        assert!(text.contains("By Account"));
    }
}
