//! Account list formatting

use tabled::Tabled;

use super::render;
use crate::models::Account;
use crate::reports::totals;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format accounts as a table followed by the net total
pub fn format_account_list(accounts: &[Account], currency: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let mut rows: Vec<AccountRow> = accounts
        .iter()
        .map(|a| AccountRow {
            name: a.name.clone(),
            account_type: a.account_type.to_string(),
            balance: a.display_balance(currency),
        })
        .collect();
    rows.push(AccountRow {
        name: "TOTAL".to_string(),
        account_type: String::new(),
        balance: totals::total_balance(accounts).format_with_symbol(currency),
    });

    render(rows)
}

/// Format a single account's details
pub fn format_account_details(account: &Account, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Type:    {}\n", account.account_type));
    output.push_str(&format!("  Balance: {}\n", account.display_balance(currency)));
    output.push_str(&format!("  ID:      {}\n", account.id));
    output
}
