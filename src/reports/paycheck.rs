//! Paycheck report
//!
//! Upcoming income: the next payment, how far away it is, and the
//! this-month / next-month totals.

use chrono::NaiveDate;
use serde::Serialize;

use super::totals;
use crate::models::{Income, Money};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Serialize)]
pub struct PaycheckReport {
    pub today: NaiveDate,
    pub next_income: Option<Income>,
    /// 0 when there is no income
    pub days_until_next: i64,
    pub total_this_month: Money,
    pub total_next_month: Money,
    /// Ascending by due date
    pub upcoming: Vec<Income>,
}

impl PaycheckReport {
    pub fn generate(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let incomes = &snapshot.incomes;
        Self {
            today,
            next_income: totals::next_income(incomes).cloned(),
            days_until_next: totals::days_until_next_income(incomes, today),
            total_this_month: totals::total_income_this_month(incomes),
            total_next_month: totals::total_income_next_month(incomes),
            upcoming: totals::incomes_by_due_date(incomes)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Paycheck\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!("Next Income:       {} days\n", self.days_until_next));
        if let Some(next) = &self.next_income {
            output.push_str(&format!(
                "                   {} - {}\n",
                next.name,
                next.amount_this_month.format_with_symbol(currency)
            ));
        }
        output.push_str(&format!(
            "This Month:        {:>12}\n",
            self.total_this_month.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Next Month:        {:>12}\n",
            self.total_next_month.format_with_symbol(currency)
        ));
        output.push('\n');

        if self.upcoming.is_empty() {
            output.push_str("No income scheduled.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:<12} {:<14} {:>12} {:>12}\n",
            "Income", "Date", "Account", "This Month", "Next Month"
        ));
        output.push_str(&"-".repeat(78));
        output.push('\n');
        for income in &self.upcoming {
            output.push_str(&format!(
                "{:<24} {:<12} {:<14} {:>12} {:>12}\n",
                truncate(&income.name, 24),
                income.due_date.format(date_format).to_string(),
                truncate(&income.bank_account, 14),
                format!("+{}", income.amount_this_month.format_with_symbol(currency)),
                income.amount_next_month.format_with_symbol(currency),
            ));
        }

        output
    }
}

pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            incomes: vec![
                Income::new(
                    "Freelance Project",
                    Money::from_cents(80000),
                    Money::zero(),
                    date(2025, 10, 28),
                    "Checking",
                ),
                Income::new(
                    "Salary",
                    Money::from_cents(350000),
                    Money::from_cents(350000),
                    date(2025, 10, 25),
                    "Checking",
                ),
            ],
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_generate() {
        let report = PaycheckReport::generate(&snapshot(), date(2025, 10, 16));

        assert_eq!(report.next_income.as_ref().unwrap().name, "Salary");
        assert_eq!(report.days_until_next, 9);
        assert_eq!(report.total_this_month.cents(), 430000);
        assert_eq!(report.total_next_month.cents(), 350000);
        assert_eq!(report.upcoming[0].name, "Salary");
        assert_eq!(report.upcoming[1].name, "Freelance Project");
    }

    #[test]
    fn test_empty_incomes() {
        let report = PaycheckReport::generate(&Snapshot::default(), date(2025, 10, 16));
        assert!(report.next_income.is_none());
        assert_eq!(report.days_until_next, 0);

        let text = report.format_terminal("$", "%Y-%m-%d");
        assert!(text.contains("Next Income:       0 days"));
        assert!(text.contains("No income scheduled."));
    }

    #[test]
    fn test_format_terminal() {
        let report = PaycheckReport::generate(&snapshot(), date(2025, 10, 16));
        let text = report.format_terminal("$", "%b %d, %Y");

        assert!(text.contains("9 days"));
        assert!(text.contains("Salary - $3500.00"));
        assert!(text.contains("Oct 25, 2025"));
        assert!(text.contains("+$800.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Checking", 14), "Checking");
        assert_eq!(truncate("A very long income name", 10), "A very lo…");
    }
}
