//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every handler takes
//! the store and the loaded settings; handlers that add entities persist the
//! store before returning.

pub mod account;
pub mod bill;
pub mod expense;
pub mod income;
pub mod report;

pub use account::{handle_account_command, AccountCommands};
pub use bill::{handle_bill_command, BillCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::{Local, NaiveDate};

use crate::dates::parse_date;
use crate::error::PaycheckResult;

/// Resolve an optional `--today`/`--date` value, defaulting to the local date
pub(crate) fn date_or_today(field: &str, value: Option<&str>) -> PaycheckResult<NaiveDate> {
    match value {
        Some(value) => parse_date(field, value),
        None => Ok(Local::now().date_naive()),
    }
}
