//! Bill list formatting

use tabled::Tabled;

use super::render;
use crate::models::Bill;
use crate::reports::totals;

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "This Month")]
    this_month: String,
    #[tabled(rename = "Next Month")]
    next_month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Account")]
    bank_account: String,
}

/// Format bills ordered by day of month, with totals for both months
pub fn format_bill_list(bills: &[Bill], currency: &str) -> String {
    if bills.is_empty() {
        return "No bills found.".to_string();
    }

    let mut rows: Vec<BillRow> = totals::bills_by_calendar_day(bills)
        .into_iter()
        .map(|b| BillRow {
            day: b.calendar_day.to_string(),
            name: b.name.clone(),
            this_month: b.amount_this_month.format_with_symbol(currency),
            next_month: b.amount_next_month.format_with_symbol(currency),
            category: b.category.to_string(),
            status: if b.status.needs_attention() {
                format!("{} (!)", b.status)
            } else {
                b.status.to_string()
            },
            bank_account: b.bank_account.clone(),
        })
        .collect();
    rows.push(BillRow {
        day: String::new(),
        name: "TOTAL".to_string(),
        this_month: totals::total_bills_this_month(bills).format_with_symbol(currency),
        next_month: totals::total_bills_next_month(bills).format_with_symbol(currency),
        category: String::new(),
        status: String::new(),
        bank_account: String::new(),
    });

    render(rows)
}

pub fn format_bill_details(bill: &Bill, currency: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Bill: {}\n", bill.name));
    output.push_str(&format!(
        "  This Month: {}\n",
        bill.amount_this_month.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Next Month: {}\n",
        bill.amount_next_month.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Due:        {} (day {})\n",
        bill.due_date.format(date_format),
        bill.calendar_day
    ));
    output.push_str(&format!("  Category:   {}\n", bill.category));
    output.push_str(&format!("  Status:     {}\n", bill.status));
    output.push_str(&format!("  Account:    {}\n", bill.bank_account));
    output.push_str(&format!("  ID:         {}\n", bill.id));
    output
}
