//! Core data models for paycheck-cli
//!
//! Accounts, bills, incomes and coasting expenses. Entities are immutable
//! once stored; the only mutation the store supports is append.

pub mod account;
pub mod bill;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;

pub use account::{Account, AccountType, AccountValidationError};
pub use bill::{Bill, BillCategory, BillStatus, BillValidationError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{AccountId, BillId, ExpenseId, IncomeId};
pub use income::{Income, IncomeValidationError};
pub use money::{Money, MoneyParseError, MAX_AMOUNT_CENTS};
