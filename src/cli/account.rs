//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list};
use crate::error::PaycheckResult;
use crate::forms::AccountForm;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a bank account
    ///
    /// Bills, incomes and expenses refer to accounts by name, so each name may
    /// be used only once (ignoring case).
    Add {
        /// Account name (must be unique, ignoring case)
        name: String,
        /// Account type (checking, savings, credit, investment)
        #[arg(short = 't', long = "type", default_value = "checking")]
        account_type: String,
        /// Current balance (e.g., "2450.50"; negative for credit owed)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> PaycheckResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add {
            name,
            account_type,
            balance,
        } => {
            let account = service.create(&AccountForm {
                name,
                account_type,
                balance,
            })?;
            storage.save()?;

            println!("Added account: {}", account.name);
            println!("  Type:    {}", account.account_type);
            println!(
                "  Balance: {}",
                account.balance.format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID:      {}", account.id);
        }
        AccountCommands::Show { account } => {
            let account = service.require(&account)?;
            print!("{}", format_account_details(&account, &settings.currency_symbol));
        }
        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts, &settings.currency_symbol));
        }
    }

    Ok(())
}
