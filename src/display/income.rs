//! Income list formatting

use tabled::Tabled;

use super::render;
use crate::models::Income;
use crate::reports::totals;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "This Month")]
    this_month: String,
    #[tabled(rename = "Next Month")]
    next_month: String,
    #[tabled(rename = "Account")]
    bank_account: String,
}

pub fn format_income_list(incomes: &[Income], currency: &str, date_format: &str) -> String {
    if incomes.is_empty() {
        return "No income found.".to_string();
    }

    let mut rows: Vec<IncomeRow> = totals::incomes_by_due_date(incomes)
        .into_iter()
        .map(|i| IncomeRow {
            due: i.due_date.format(date_format).to_string(),
            name: i.name.clone(),
            this_month: i.amount_this_month.format_with_symbol(currency),
            next_month: i.amount_next_month.format_with_symbol(currency),
            bank_account: i.bank_account.clone(),
        })
        .collect();
    rows.push(IncomeRow {
        due: String::new(),
        name: "TOTAL".to_string(),
        this_month: totals::total_income_this_month(incomes).format_with_symbol(currency),
        next_month: totals::total_income_next_month(incomes).format_with_symbol(currency),
        bank_account: String::new(),
    });

    render(rows)
}

pub fn format_income_details(income: &Income, currency: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income: {}\n", income.name));
    output.push_str(&format!(
        "  This Month: {}\n",
        income.amount_this_month.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Next Month: {}\n",
        income.amount_next_month.format_with_symbol(currency)
    ));
    output.push_str(&format!("  Due:        {}\n", income.due_date.format(date_format)));
    output.push_str(&format!("  Account:    {}\n", income.bank_account));
    output.push_str(&format!("  ID:         {}\n", income.id));
    output
}
