//! Expense list formatting

use tabled::Tabled;

use super::render;
use crate::models::Expense;
use crate::reports::totals;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Account")]
    bank_account: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Expenses in the order given, plus the coasted total
pub fn format_expense_list(expenses: &[Expense], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            date: e.date.format(date_format).to_string(),
            name: e.name.clone(),
            bank_account: e.bank_account.clone(),
            amount: e.amount.format_with_symbol(currency),
        })
        .collect();
    rows.push(ExpenseRow {
        date: String::new(),
        name: "TOTAL".to_string(),
        bank_account: String::new(),
        amount: totals::total_expenses(expenses).format_with_symbol(currency),
    });

    render(rows)
}

pub fn format_expense_details(expense: &Expense, currency: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!(
        "  Amount:  {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("  Date:    {}\n", expense.date.format(date_format)));
    output.push_str(&format!("  Account: {}\n", expense.bank_account));
    output.push_str(&format!("  ID:      {}\n", expense.id));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_format_expense_list() {
        let expenses = vec![Expense::new(
            "Groceries",
            "Checking",
            Money::from_cents(6600),
            NaiveDate::from_ymd_opt(2025, 10, 14).unwrap(),
        )];

        let output = format_expense_list(&expenses, "€", "%Y-%m-%d");
        assert!(output.contains("2025-10-14"));
        assert!(output.contains("€66.00"));
        assert!(output.contains("TOTAL"));
    }
}
