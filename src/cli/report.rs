//! CLI commands for reports
//!
//! One subcommand per dashboard view plus `summary`, which prints them all
//! from the same snapshot.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::date_or_today;
use crate::config::Settings;
use crate::error::PaycheckResult;
use crate::reports::{CloseOutReport, CoasterReport, PaycheckReport, SurvivorReport};
use crate::storage::Storage;

/// Options shared by every report
#[derive(Args, Debug, Clone, Default)]
pub struct ReportOptions {
    /// Date to report as of (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<String>,

    /// Print JSON instead of the terminal layout
    #[arg(long)]
    pub json: bool,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Next income and this/next month income totals
    Paycheck(ReportOptions),

    /// Spending logged since balances were recorded
    Coaster(ReportOptions),

    /// Balance left after bills due before the next paycheck
    #[command(alias = "closeout")]
    CloseOut(ReportOptions),

    /// How long the balance covers monthly bills
    Survivor(ReportOptions),

    /// Every report at once
    Summary(ReportOptions),
}

#[derive(Serialize)]
struct Summary {
    paycheck: PaycheckReport,
    coaster: CoasterReport,
    close_out: CloseOutReport,
    survivor: SurvivorReport,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> PaycheckResult<()> {
    let output = match cmd {
        ReportCommands::Paycheck(opts) => render_paycheck(storage, settings, &opts)?,
        ReportCommands::Coaster(opts) => render_coaster(storage, settings, &opts)?,
        ReportCommands::CloseOut(opts) => render_close_out(storage, settings, &opts)?,
        ReportCommands::Survivor(opts) => render_survivor(storage, settings, &opts)?,
        ReportCommands::Summary(opts) => render_summary(storage, settings, &opts)?,
    };
    print!("{}", output);
    Ok(())
}

fn today(opts: &ReportOptions) -> PaycheckResult<NaiveDate> {
    date_or_today("today", opts.today.as_deref())
}

fn to_json<T: Serialize>(value: &T) -> PaycheckResult<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

pub fn render_paycheck(
    storage: &Storage,
    settings: &Settings,
    opts: &ReportOptions,
) -> PaycheckResult<String> {
    let report = PaycheckReport::generate(&storage.snapshot()?, today(opts)?);
    if opts.json {
        return to_json(&report);
    }
    Ok(report.format_terminal(&settings.currency_symbol, &settings.date_format))
}

pub fn render_coaster(
    storage: &Storage,
    settings: &Settings,
    opts: &ReportOptions,
) -> PaycheckResult<String> {
    let report = CoasterReport::generate(&storage.snapshot()?, today(opts)?);
    if opts.json {
        return to_json(&report);
    }
    Ok(report.format_terminal(&settings.currency_symbol, &settings.date_format))
}

pub fn render_close_out(
    storage: &Storage,
    settings: &Settings,
    opts: &ReportOptions,
) -> PaycheckResult<String> {
    let report = CloseOutReport::generate(&storage.snapshot()?);
    if opts.json {
        return to_json(&report);
    }
    Ok(report.format_terminal(&settings.currency_symbol, &settings.date_format))
}

pub fn render_survivor(
    storage: &Storage,
    settings: &Settings,
    opts: &ReportOptions,
) -> PaycheckResult<String> {
    let report = SurvivorReport::generate(&storage.snapshot()?);
    if opts.json {
        return to_json(&report);
    }
    Ok(report.format_terminal(&settings.currency_symbol))
}

pub fn render_summary(
    storage: &Storage,
    settings: &Settings,
    opts: &ReportOptions,
) -> PaycheckResult<String> {
    let snapshot = storage.snapshot()?;
    let today = today(opts)?;
    let summary = Summary {
        paycheck: PaycheckReport::generate(&snapshot, today),
        coaster: CoasterReport::generate(&snapshot, today),
        close_out: CloseOutReport::generate(&snapshot),
        survivor: SurvivorReport::generate(&snapshot),
    };
    if opts.json {
        return to_json(&summary);
    }

    let currency = &settings.currency_symbol;
    let date_format = &settings.date_format;
    Ok([
        summary.paycheck.format_terminal(currency, date_format),
        summary.coaster.format_terminal(currency, date_format),
        summary.close_out.format_terminal(currency, date_format),
        summary.survivor.format_terminal(currency),
    ]
    .join("\n"))
}
