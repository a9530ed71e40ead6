//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use super::date_or_today;
use crate::display::{format_income_details, format_income_list};
use crate::error::PaycheckResult;
use crate::forms::IncomeForm;
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an expected income
    Add {
        /// Income name
        name: String,
        /// Amount expected this month
        #[arg(short, long)]
        amount: String,
        /// Amount expected next month (defaults to this month's amount)
        #[arg(short, long)]
        next_amount: Option<String>,
        /// Next payment date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Bank account the income is deposited into
        #[arg(long)]
        account: String,
    },
    /// List incomes by due date
    List {
        /// Count days to the next income from this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Show income details
    Show {
        /// Income name or ID
        income: String,
    },
}

pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> PaycheckResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            next_amount,
            due,
            account,
        } => {
            let income = service.create(&IncomeForm {
                name,
                amount_next_month: next_amount.unwrap_or_else(|| amount.clone()),
                amount_this_month: amount,
                due_date: due,
                bank_account: account,
            })?;
            storage.save()?;

            println!("Added income: {}", income.name);
            println!(
                "  Amount: {} this month, {} next month",
                income.amount_this_month.format_with_symbol(&settings.currency_symbol),
                income.amount_next_month.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Due:    {}", income.due_date.format(&settings.date_format));
        }
        IncomeCommands::List { today } => {
            let today = date_or_today("today", today.as_deref())?;
            let incomes = service.list()?;
            println!(
                "{}",
                format_income_list(&incomes, &settings.currency_symbol, &settings.date_format)
            );

            if let Some(next) = service.next()? {
                println!();
                println!(
                    "Next income: {} on {} ({} days)",
                    next.name,
                    next.due_date.format(&settings.date_format),
                    service.days_until_next(today)?
                );
            }
        }
        IncomeCommands::Show { income } => {
            let income = service.require(&income)?;
            print!(
                "{}",
                format_income_details(&income, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
