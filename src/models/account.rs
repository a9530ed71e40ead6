//! Account model
//!
//! A bank account with a single current balance. Credit accounts usually
//! carry a negative balance; it is kept signed and only the display flips it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::AccountId;
use super::money::Money;

/// Type of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Credit,
    Investment,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Credit,
        AccountType::Investment,
    ];

    /// Lowercase identifier as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Credit => "credit",
            Self::Investment => "investment",
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Ok(Self::Credit),
            "investment" => Ok(Self::Investment),
            other => Err(format!(
                "unknown account type '{}' (expected checking, savings, credit or investment)",
                other
            )),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking"); bills and incomes refer to it by this
    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance, negative for money owed
    pub balance: Money,
}

impl Account {
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            balance,
        }
    }

    /// True when the balance is money owed
    pub fn is_credit(&self) -> bool {
        self.balance.is_negative()
    }

    /// Balance as shown in lists: magnitude plus a credit marker when negative
    pub fn display_balance(&self, currency: &str) -> String {
        if self.is_credit() {
            format!("{} (credit)", self.balance.abs().format_with_symbol(currency))
        } else {
            self.balance.format_with_symbol(currency)
        }
    }

    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
