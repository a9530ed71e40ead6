//! Aggregation over entity snapshots
//!
//! Pure reducers: no storage access, no clock. Sums are exact cent
//! arithmetic; selections break ties by insertion order.

use chrono::NaiveDate;

use crate::dates::{days_until, is_before};
use crate::models::{Account, Bill, Expense, Income, Money};

/// Net of every account balance, credit balances included as-is
pub fn total_balance(accounts: &[Account]) -> Money {
    accounts.iter().map(|a| a.balance).sum()
}

pub fn total_bills_this_month(bills: &[Bill]) -> Money {
    bills.iter().map(|b| b.amount_this_month).sum()
}

pub fn total_bills_next_month(bills: &[Bill]) -> Money {
    bills.iter().map(|b| b.amount_next_month).sum()
}

pub fn total_income_this_month(incomes: &[Income]) -> Money {
    incomes.iter().map(|i| i.amount_this_month).sum()
}

pub fn total_income_next_month(incomes: &[Income]) -> Money {
    incomes.iter().map(|i| i.amount_next_month).sum()
}

/// Everything coasted since the last paycheck
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// The income with the earliest due date; the first inserted wins a tie
pub fn next_income(incomes: &[Income]) -> Option<&Income> {
    // min_by_key keeps the first of several equal minimums
    incomes.iter().min_by_key(|i| i.due_date)
}

/// Days until the next income lands, or 0 when there is no income at all
pub fn days_until_next_income(incomes: &[Income], today: NaiveDate) -> i64 {
    next_income(incomes).map_or(0, |income| days_until(income.due_date, today))
}

/// Bills due strictly before `boundary`, in their original order
pub fn bills_due_before(bills: &[Bill], boundary: NaiveDate) -> Vec<&Bill> {
    bills
        .iter()
        .filter(|b| is_before(b.due_date, boundary))
        .collect()
}

/// Incomes ascending by due date (stable)
pub fn incomes_by_due_date(incomes: &[Income]) -> Vec<&Income> {
    let mut sorted: Vec<_> = incomes.iter().collect();
    sorted.sort_by_key(|i| i.due_date);
    sorted
}

/// Bills ascending by calendar day (stable)
pub fn bills_by_calendar_day(bills: &[Bill]) -> Vec<&Bill> {
    let mut sorted: Vec<_> = bills.iter().collect();
    sorted.sort_by_key(|b| b.calendar_day);
    sorted
}

/// Coasted amount per bank-account reference, in first-seen order
pub fn expenses_by_account(expenses: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();
    for expense in expenses {
        match totals
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(expense.bank_account.trim()))
        {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.bank_account.trim().to_string(), expense.amount)),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, BillCategory, BillStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(name: &str, cents: i64, due: NaiveDate) -> Bill {
        Bill::new(
            name,
            Money::from_cents(cents),
            Money::from_cents(cents),
            due,
            BillCategory::Need,
            BillStatus::Scheduled,
            "Checking",
        )
    }

    fn income(name: &str, cents: i64, due: NaiveDate) -> Income {
        Income::new(name, Money::from_cents(cents), Money::zero(), due, "Checking")
    }

    fn expense(account: &str, cents: i64) -> Expense {
        Expense::new("Spend", account, Money::from_cents(cents), date(2025, 10, 16))
    }

    #[test]
    fn test_total_balance_includes_credit() {
        let accounts = vec![
            Account::new("Chase Checking", AccountType::Checking, Money::from_cents(245050)),
            Account::new("Savings Account", AccountType::Savings, Money::from_cents(875000)),
            Account::new("Credit Card", AccountType::Credit, Money::from_cents(-85025)),
        ];
        assert_eq!(total_balance(&accounts), Money::from_cents(1035025));
        assert!((total_balance(&accounts).as_f64() - 10350.25).abs() < 1e-9);
    }

    #[test]
    fn test_total_balance_matches_float_sum() {
        let balances = [12345, -67, 0, 99999, -100000, 1];
        let accounts: Vec<_> = balances
            .iter()
            .map(|c| Account::new("A", AccountType::Checking, Money::from_cents(*c)))
            .collect();
        let float_sum: f64 = balances.iter().map(|c| *c as f64 / 100.0).sum();
        assert!((total_balance(&accounts).as_f64() - float_sum).abs() < 1e-9);
    }

    #[test]
    fn test_total_bills() {
        let due = date(2025, 10, 1);
        let mut bills = vec![
            bill("Apartment Rent", 101968, due),
            bill("Electric Bill", 9000, due),
            bill("Spotify", 1298, due),
            bill("Savings", 50000, due),
        ];
        assert_eq!(total_bills_this_month(&bills), Money::from_cents(162266));

        bills[1].amount_next_month = Money::from_cents(12000);
        assert_eq!(total_bills_next_month(&bills), Money::from_cents(165266));
    }

    #[test]
    fn test_total_income() {
        let incomes = vec![
            income("Salary", 350000, date(2025, 10, 25)),
            income("Freelance Project", 80000, date(2025, 10, 28)),
        ];
        assert_eq!(total_income_this_month(&incomes), Money::from_cents(430000));
        assert_eq!(total_income_next_month(&incomes), Money::zero());
    }

    #[test]
    fn test_total_expenses() {
        let expenses = vec![
            expense("Checking", 550),
            expense("Checking", 1500),
            expense("Credit Card", 4500),
        ];
        assert_eq!(total_expenses(&expenses), Money::from_cents(6550));
    }

    #[test]
    fn test_next_income_earliest_and_tie_break() {
        let incomes = vec![
            income("Freelance", 80000, date(2025, 10, 28)),
            income("Salary", 350000, date(2025, 10, 25)),
            income("Bonus", 10000, date(2025, 10, 25)),
        ];
        assert_eq!(next_income(&incomes).unwrap().name, "Salary");
    }

    #[test]
    fn test_next_income_empty() {
        assert!(next_income(&[]).is_none());
        assert_eq!(days_until_next_income(&[], date(2025, 10, 16)), 0);
    }

    #[test]
    fn test_days_until_next_income() {
        let incomes = vec![income("Salary", 350000, date(2025, 10, 25))];
        assert_eq!(days_until_next_income(&incomes, date(2025, 10, 16)), 9);
        assert_eq!(days_until_next_income(&incomes, date(2025, 10, 27)), -2);
    }

    #[test]
    fn test_bills_due_before_boundary() {
        let bills = vec![
            bill("Rent", 101968, date(2025, 11, 1)),
            bill("Electric", 9000, date(2025, 10, 20)),
            bill("Spotify", 1298, date(2025, 10, 5)),
            bill("Boundary Day", 100, date(2025, 10, 25)),
        ];
        let due: Vec<_> = bills_due_before(&bills, date(2025, 10, 25))
            .into_iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(due, ["Electric", "Spotify"]);
    }

    #[test]
    fn test_sorted_views_are_stable() {
        let incomes = vec![
            income("Late", 1, date(2025, 10, 28)),
            income("Early A", 1, date(2025, 10, 25)),
            income("Early B", 1, date(2025, 10, 25)),
        ];
        let names: Vec<_> = incomes_by_due_date(&incomes)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["Early A", "Early B", "Late"]);

        let bills = vec![
            bill("Rent", 1, date(2025, 11, 1)),
            bill("Electric", 1, date(2025, 10, 20)),
            bill("Spotify", 1, date(2025, 10, 5)),
        ];
        let days: Vec<_> = bills_by_calendar_day(&bills)
            .iter()
            .map(|b| b.calendar_day)
            .collect();
        assert_eq!(days, [1, 5, 20]);
    }

    #[test]
    fn test_expenses_by_account() {
        let expenses = vec![
            expense("Checking", 550),
            expense("Credit Card", 4500),
            expense("checking", 1500),
        ];
        assert_eq!(
            expenses_by_account(&expenses),
            vec![
                ("Checking".to_string(), Money::from_cents(2050)),
                ("Credit Card".to_string(), Money::from_cents(4500)),
            ]
        );
    }
}
