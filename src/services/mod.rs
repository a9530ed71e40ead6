//! Service layer for paycheck-cli
//!
//! Services sit between the presentation layer and the store: they validate
//! incoming entities, append them, and log what happened.

pub mod account;
pub mod bill;
pub mod expense;
pub mod income;

pub use account::AccountService;
pub use bill::BillService;
pub use expense::ExpenseService;
pub use income::IncomeService;

use tracing::warn;

use crate::error::PaycheckResult;
use crate::storage::Storage;

/// Log a warning when `reference` names no stored account
///
/// Dangling references are accepted; this only reports them. Returns
/// whether the reference resolved.
pub(crate) fn check_account_reference(
    storage: &Storage,
    entity_type: &str,
    entity_name: &str,
    reference: &str,
) -> PaycheckResult<bool> {
    let known = storage.accounts.find_by_name(reference)?.is_some();
    if !known {
        warn!(
            entity_type,
            entity = entity_name,
            bank_account = reference,
            "bank account does not match any known account"
        );
    }
    Ok(known)
}
