//! Derived financial state
//!
//! Each stage consumes the previous one:
//!
//! 1. real balance = total balance - coasted expenses
//! 2. closing balance = real balance - bills due before the next paycheck
//! 3. survival ratio = closing balance / monthly bills
//! 4. margin = (monthly income - monthly bills) / monthly income
//! 5. projected month-end = closing balance + (monthly income - monthly bills)
//! 6. status from the survival ratio
//!
//! Money stays in exact cents through stages 1, 2 and 5. Zero denominators
//! produce sentinels (infinite ratio, `None` margin), never errors.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::totals;
use crate::models::{Bill, Money};
use crate::storage::Snapshot;

/// Days per month used to turn a fractional ratio into leftover days
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Ratio at or above which the user is thriving
pub const THRIVING_RATIO: f64 = 1.5;

/// Ratio at or above which the user is surviving
pub const SURVIVING_RATIO: f64 = 1.0;

/// Qualitative read of the survival ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurvivalStatus {
    Thriving,
    Surviving,
    PlanAhead,
}

impl SurvivalStatus {
    /// Inclusive lower bounds: 1.5 is Thriving, 1.0 is Surviving.
    /// NaN compares false everywhere and lands on PlanAhead.
    pub fn classify(ratio: f64) -> Self {
        if ratio >= THRIVING_RATIO {
            Self::Thriving
        } else if ratio >= SURVIVING_RATIO {
            Self::Surviving
        } else {
            Self::PlanAhead
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Thriving => "Thriving",
            Self::Surviving => "Surviving",
            Self::PlanAhead => "Plan Ahead",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Thriving => "You're Thriving!",
            Self::Surviving => "You're Surviving",
            Self::PlanAhead => "Plan Ahead",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Thriving => {
                "You have excellent financial cushion. Consider building your savings or investing extra funds."
            }
            Self::Surviving => {
                "You can cover your bills, but building more reserves would increase your financial security."
            }
            Self::PlanAhead => {
                "Your current balance won't cover a full month of bills. Focus on reducing expenses or increasing income."
            }
        }
    }
}

impl fmt::Display for SurvivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Survival ratio split into whole months and leftover days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurvivalBreakdown {
    pub months: i64,
    pub days: i64,
}

impl SurvivalBreakdown {
    /// `None` for infinite or NaN ratios
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        if !ratio.is_finite() {
            return None;
        }
        let months = ratio.floor();
        let days = ((ratio - months) * DAYS_PER_MONTH).round();
        Some(Self {
            months: months as i64,
            days: days as i64,
        })
    }
}

impl fmt::Display for SurvivalBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months {} days", self.months, self.days)
    }
}

/// Closing balance as a multiple of monthly bills
///
/// With no monthly bills the ratio is `+inf` for a non-negative closing
/// balance and `-inf` for a negative one.
pub fn survival_ratio(closing_balance: Money, monthly_bills: Money) -> f64 {
    if monthly_bills.is_zero() {
        if closing_balance.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        closing_balance.as_f64() / monthly_bills.as_f64()
    }
}

/// Share of monthly income left after bills, in percent; `None` without income
pub fn margin_percent(monthly_income: Money, monthly_bills: Money) -> Option<f64> {
    if monthly_income.is_zero() {
        return None;
    }
    let net = (monthly_income - monthly_bills).as_f64();
    Some(net / monthly_income.as_f64() * 100.0)
}

/// The full derived state for one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub total_balance: Money,
    pub total_expenses: Money,
    pub real_balance: Money,
    /// Next income date; bills strictly before it are closed out
    pub boundary: Option<NaiveDate>,
    pub bills_due_before_paycheck: Money,
    pub closing_balance: Money,
    pub monthly_bills: Money,
    pub monthly_income: Money,
    pub net_monthly: Money,
    pub survival_ratio: f64,
    pub breakdown: Option<SurvivalBreakdown>,
    pub margin_percent: Option<f64>,
    pub projected_month_end: Money,
    pub status: SurvivalStatus,
}

impl Projection {
    /// Run every stage against a snapshot
    ///
    /// The close-out boundary is the next income's due date. Without any
    /// income there is no paycheck to stop at, so every bill is closed out.
    pub fn compute(snapshot: &Snapshot) -> Self {
        let boundary = totals::next_income(&snapshot.incomes).map(|i| i.due_date);
        let due = bills_due_by(&snapshot.bills, boundary);

        Self::from_parts(
            totals::total_balance(&snapshot.accounts),
            totals::total_expenses(&snapshot.expenses),
            due.iter().map(|b| b.amount_this_month).sum(),
            totals::total_bills_this_month(&snapshot.bills),
            totals::total_income_this_month(&snapshot.incomes),
            boundary,
        )
    }

    /// Run stages 1-6 from already aggregated totals
    pub fn from_parts(
        total_balance: Money,
        total_expenses: Money,
        bills_due_before_paycheck: Money,
        monthly_bills: Money,
        monthly_income: Money,
        boundary: Option<NaiveDate>,
    ) -> Self {
        let real_balance = total_balance - total_expenses;
        let closing_balance = real_balance - bills_due_before_paycheck;
        let ratio = survival_ratio(closing_balance, monthly_bills);
        let net_monthly = monthly_income - monthly_bills;

        Self {
            total_balance,
            total_expenses,
            real_balance,
            boundary,
            bills_due_before_paycheck,
            closing_balance,
            monthly_bills,
            monthly_income,
            net_monthly,
            survival_ratio: ratio,
            breakdown: SurvivalBreakdown::from_ratio(ratio),
            margin_percent: margin_percent(monthly_income, monthly_bills),
            projected_month_end: closing_balance + net_monthly,
            status: SurvivalStatus::classify(ratio),
        }
    }

    /// Width of the survivor coverage bar, 0-100; a ratio of 2 fills it
    pub fn coverage_bar_percent(&self) -> f64 {
        (self.survival_ratio * 50.0).clamp(0.0, 100.0)
    }
}

/// Bills closed out against an optional boundary
pub(crate) fn bills_due_by(bills: &[Bill], boundary: Option<NaiveDate>) -> Vec<&Bill> {
    match boundary {
        Some(boundary) => totals::bills_due_before(bills, boundary),
        None => bills.iter().collect(),
    }
}
