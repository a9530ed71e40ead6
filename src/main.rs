use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use paycheck::cli::{
    handle_account_command, handle_bill_command, handle_expense_command, handle_income_command,
    handle_report_command,
};
use paycheck::config::{PaycheckPaths, Settings};
use paycheck::storage::Storage;

#[derive(Parser)]
#[command(
    name = "paycheck",
    version,
    about = "Paycheck-to-paycheck budgeting dashboard for the terminal",
    long_about = "paycheck-cli tracks bank accounts, recurring bills, expected income \
                  and day-to-day spending, and reports what is left before the next \
                  paycheck and how long your balance would cover your bills."
)]
struct Cli {
    /// Session file to use instead of the default
    #[arg(long, global = true, env = "PAYCHECK_FILE")]
    file: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bank account commands
    #[command(subcommand)]
    Account(paycheck::cli::AccountCommands),

    /// Recurring bill commands
    #[command(subcommand)]
    Bill(paycheck::cli::BillCommands),

    /// Expected income commands
    #[command(subcommand)]
    Income(paycheck::cli::IncomeCommands),

    /// Coasted spending commands
    #[command(subcommand)]
    Expense(paycheck::cli::ExpenseCommands),

    /// Dashboard reports
    #[command(subcommand)]
    Report(paycheck::cli::ReportCommands),

    /// Show current configuration and paths
    Config,

    /// Delete the session file and start over
    Reset,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paycheck={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = PaycheckPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let session_file = cli.file.unwrap_or_else(|| paths.session_file());
    debug!(session = %session_file.display(), "resolved session file");

    match cli.command {
        Some(Commands::Account(cmd)) => {
            let storage = Storage::open(&session_file)?;
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Bill(cmd)) => {
            let storage = Storage::open(&session_file)?;
            handle_bill_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            let storage = Storage::open(&session_file)?;
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let storage = Storage::open(&session_file)?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let storage = Storage::open(&session_file)?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("paycheck-cli Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Session file:   {}", session_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        Some(Commands::Reset) => {
            if session_file.exists() {
                std::fs::remove_file(&session_file)?;
                println!("Removed {}", session_file.display());
            } else {
                println!("Nothing to reset.");
            }
        }
        None => {
            println!("paycheck-cli - paycheck-to-paycheck budgeting");
            println!();
            println!("Run 'paycheck --help' for usage information.");
            println!("Run 'paycheck report summary' for the full dashboard.");
        }
    }

    Ok(())
}
