//! Bill model
//!
//! A recurring obligation with separate amounts for this month and next,
//! a due date, and closed category/status sets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::BillId;
use super::money::Money;
use crate::dates::calendar_day_of;

/// What kind of obligation a bill is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillCategory {
    Rent,
    Need,
    Want,
    Debt,
    Savings,
    Investment,
}

impl BillCategory {
    pub const ALL: [BillCategory; 6] = [
        BillCategory::Rent,
        BillCategory::Need,
        BillCategory::Want,
        BillCategory::Debt,
        BillCategory::Savings,
        BillCategory::Investment,
    ];
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rent => "Rent",
            Self::Need => "Need",
            Self::Want => "Want",
            Self::Debt => "Debt",
            Self::Savings => "Savings",
            Self::Investment => "Investment",
        };
        f.pad(label)
    }
}

impl FromStr for BillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected Rent, Need, Want, Debt, Savings or Investment)",
                    s.trim()
                )
            })
    }
}

/// How a bill is going to get paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillStatus {
    Autopay,
    Scheduled,
    #[serde(rename = "Needs Scheduling")]
    NeedsScheduling,
}

impl BillStatus {
    pub const ALL: [BillStatus; 3] = [
        BillStatus::Autopay,
        BillStatus::Scheduled,
        BillStatus::NeedsScheduling,
    ];

    /// Bills nobody has arranged payment for yet
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::NeedsScheduling)
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Autopay => "Autopay",
            Self::Scheduled => "Scheduled",
            Self::NeedsScheduling => "Needs Scheduling",
        };
        f.pad(label)
    }
}

impl FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "needs-scheduling" and "needs_scheduling" from the command line
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|st| st.to_string().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| {
                format!(
                    "unknown status '{}' (expected Autopay, Scheduled or Needs Scheduling)",
                    s.trim()
                )
            })
    }
}

/// A recurring bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub name: String,
    pub amount_this_month: Money,
    pub amount_next_month: Money,
    pub due_date: NaiveDate,
    /// Day-of-month of `due_date`, fixed at creation
    pub calendar_day: u32,
    pub category: BillCategory,
    pub status: BillStatus,
    /// Free-text reference to an account name
    pub bank_account: String,
}

impl Bill {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        amount_this_month: Money,
        amount_next_month: Money,
        due_date: NaiveDate,
        category: BillCategory,
        status: BillStatus,
        bank_account: impl Into<String>,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount_this_month,
            amount_next_month,
            due_date,
            calendar_day: calendar_day_of(due_date),
            category,
            status,
            bank_account: bank_account.into(),
        }
    }

    pub fn validate(&self) -> Result<(), BillValidationError> {
        if self.name.trim().is_empty() {
            return Err(BillValidationError::EmptyName);
        }
        if self.amount_this_month.is_negative() || self.amount_next_month.is_negative() {
            return Err(BillValidationError::NegativeAmount);
        }
        if self.calendar_day != calendar_day_of(self.due_date) {
            return Err(BillValidationError::CalendarDayMismatch {
                calendar_day: self.calendar_day,
                due_date: self.due_date,
            });
        }
        if self.bank_account.trim().is_empty() {
            return Err(BillValidationError::EmptyBankAccount);
        }
        Ok(())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, due {})", self.name, self.amount_this_month, self.due_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NegativeAmount,
    CalendarDayMismatch {
        calendar_day: u32,
        due_date: NaiveDate,
    },
    EmptyBankAccount,
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NegativeAmount => write!(f, "Bill amounts cannot be negative"),
            Self::CalendarDayMismatch {
                calendar_day,
                due_date,
            } => write!(
                f,
                "Calendar day {} does not match due date {}",
                calendar_day, due_date
            ),
            Self::EmptyBankAccount => write!(f, "Bill must name a bank account"),
        }
    }
}

impl std::error::Error for BillValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent() -> Bill {
        Bill::new(
            "Apartment Rent",
            Money::from_cents(101968),
            Money::from_cents(101968),
            date(2025, 11, 1),
            BillCategory::Rent,
            BillStatus::Autopay,
            "Checking",
        )
    }

    #[test]
    fn test_calendar_day_derived_from_due_date() {
        let bill = rent();
        assert_eq!(bill.calendar_day, 1);
        assert!(bill.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut bill = rent();
        bill.calendar_day = 15;
        assert!(matches!(
            bill.validate(),
            Err(BillValidationError::CalendarDayMismatch { calendar_day: 15, .. })
        ));

        let mut bill = rent();
        bill.amount_next_month = Money::from_cents(-1);
        assert_eq!(bill.validate(), Err(BillValidationError::NegativeAmount));

        let mut bill = rent();
        bill.name.clear();
        assert_eq!(bill.validate(), Err(BillValidationError::EmptyName));

        let mut bill = rent();
        bill.bank_account = " ".into();
        assert_eq!(bill.validate(), Err(BillValidationError::EmptyBankAccount));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("rent".parse::<BillCategory>(), Ok(BillCategory::Rent));
        assert_eq!("Investment".parse::<BillCategory>(), Ok(BillCategory::Investment));
        assert!("Groceries".parse::<BillCategory>().is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("autopay".parse::<BillStatus>(), Ok(BillStatus::Autopay));
        assert_eq!(
            "needs-scheduling".parse::<BillStatus>(),
            Ok(BillStatus::NeedsScheduling)
        );
        assert_eq!(
            "Needs Scheduling".parse::<BillStatus>(),
            Ok(BillStatus::NeedsScheduling)
        );
        assert!("paid".parse::<BillStatus>().is_err());
        assert!(BillStatus::NeedsScheduling.needs_attention());
    }

    #[test]
    fn test_serialization_uses_display_labels() {
        let mut bill = rent();
        bill.status = BillStatus::NeedsScheduling;
        let json = serde_json::to_string(&bill).unwrap();
        assert!(json.contains("\"status\":\"Needs Scheduling\""));
        assert!(json.contains("\"category\":\"Rent\""));
        let back: Bill = serde_json::from_str(&json).unwrap();
        assert_eq!(bill, back);
    }
}
