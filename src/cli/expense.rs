//! Expense CLI commands

use clap::Subcommand;

use super::date_or_today;
use crate::config::Settings;
use crate::dates::INPUT_DATE_FORMAT;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::PaycheckResult;
use crate::forms::ExpenseForm;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record spending since the last balance update
    Add {
        /// What the money went on
        name: String,
        /// Amount spent
        #[arg(short, long)]
        amount: String,
        /// Bank account it was spent from
        #[arg(long)]
        account: String,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses, newest first
    List,
    /// Show expense details
    Show {
        /// Expense name or ID
        expense: String,
    },
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PaycheckResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            account,
            date,
        } => {
            let date = match date {
                Some(date) => date,
                None => date_or_today("date", None)?
                    .format(INPUT_DATE_FORMAT)
                    .to_string(),
            };
            let expense = service.create(&ExpenseForm {
                name,
                bank_account: account,
                amount,
                date,
            })?;
            storage.save()?;

            println!(
                "Added expense: {} {} from {}",
                expense.name,
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.bank_account
            );
        }
        ExpenseCommands::List => {
            let expenses = service.list_recent()?;
            println!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol, &settings.date_format)
            );

            let by_account = service.by_account()?;
            if !by_account.is_empty() {
                println!();
                println!("Coasted by account:");
                for (account, total) in by_account {
                    println!(
                        "  {}: {}",
                        account,
                        total.format_with_symbol(&settings.currency_symbol)
                    );
                }
            }
        }
        ExpenseCommands::Show { expense } => {
            let expense = service.require(&expense)?;
            print!(
                "{}",
                format_expense_details(&expense, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
