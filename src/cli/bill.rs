//! Bill CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_bill_details, format_bill_list};
use crate::error::PaycheckResult;
use crate::forms::BillForm;
use crate::services::BillService;
use crate::storage::Storage;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a recurring bill
    Add {
        /// Bill name
        name: String,
        /// Amount due this month
        #[arg(short, long)]
        amount: String,
        /// Amount due next month (defaults to this month's amount)
        #[arg(short, long)]
        next_amount: Option<String>,
        /// Next due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Category (rent, need, want, debt, savings, investment)
        #[arg(short, long, default_value = "need")]
        category: String,
        /// Payment status (autopay, scheduled, needs-scheduling)
        #[arg(short, long, default_value = "scheduled")]
        status: String,
        /// Bank account the bill is paid from
        #[arg(long)]
        account: String,
    },
    /// List bills by day of month
    List,
    /// Show bill details
    Show {
        /// Bill name or ID
        bill: String,
    },
}

pub fn handle_bill_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BillCommands,
) -> PaycheckResult<()> {
    let service = BillService::new(storage);

    match cmd {
        BillCommands::Add {
            name,
            amount,
            next_amount,
            due,
            category,
            status,
            account,
        } => {
            let bill = service.create(&BillForm {
                name,
                amount_next_month: next_amount.unwrap_or_else(|| amount.clone()),
                amount_this_month: amount,
                due_date: due,
                category,
                status,
                bank_account: account,
            })?;
            storage.save()?;

            println!("Added bill: {}", bill.name);
            println!(
                "  Amount: {} this month, {} next month",
                bill.amount_this_month.format_with_symbol(&settings.currency_symbol),
                bill.amount_next_month.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "  Due:    {} (day {})",
                bill.due_date.format(&settings.date_format),
                bill.calendar_day
            );
            println!("  Status: {}", bill.status);
        }
        BillCommands::List => {
            let bills = service.list()?;
            println!("{}", format_bill_list(&bills, &settings.currency_symbol));

            let attention = service.needing_attention()?;
            if !attention.is_empty() {
                println!();
                println!("{} bill(s) need scheduling.", attention.len());
            }
        }
        BillCommands::Show { bill } => {
            let bill = service.require(&bill)?;
            print!(
                "{}",
                format_bill_details(&bill, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
