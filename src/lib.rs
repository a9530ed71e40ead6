//! paycheck-cli - paycheck-to-paycheck budgeting from the terminal
//!
//! This library holds the core of a personal budgeting dashboard: an
//! in-memory store of accounts, bills, incomes and expenses, and the
//! aggregation and projection math that turns them into the figures shown
//! by each view (next paycheck, coasted spending, close-out balance and
//! survival ratio).
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Entity types and the cents-based `Money`
//! - `dates`: Day-granularity date helpers
//! - `forms`: Raw text input to validated entities
//! - `storage`: Append-only repositories, snapshots and the session file
//! - `services`: Validation and logging around each repository
//! - `reports`: Pure aggregation, projection and one read model per view
//! - `display`: Table formatting for list commands
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust
//! use paycheck::reports::Projection;
//! use paycheck::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let projection = Projection::compute(&storage.snapshot().unwrap());
//! assert!(projection.closing_balance.is_zero());
//! ```

pub mod cli;
pub mod config;
pub mod dates;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PaycheckError, PaycheckResult};
