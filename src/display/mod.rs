//! Display formatting for terminal output
//!
//! List views for each entity kind, rendered as tables with a totals row,
//! and plain-text detail views for a single entity.

pub mod account;
pub mod bill;
pub mod expense;
pub mod income;

pub use account::{format_account_details, format_account_list};
pub use bill::{format_bill_details, format_bill_list};
pub use expense::{format_expense_details, format_expense_list};
pub use income::{format_income_details, format_income_list};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows with the shared table style
pub(crate) fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
