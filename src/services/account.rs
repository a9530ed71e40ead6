//! Account service
//!
//! Creating and looking up bank accounts. Other entities refer to accounts
//! by name, so names must be unique (case-insensitive).

use tracing::info;

use crate::error::{PaycheckError, PaycheckResult};
use crate::forms::AccountForm;
use crate::models::{Account, AccountId};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse a submitted form and store the account
    pub fn create(&self, form: &AccountForm) -> PaycheckResult<Account> {
        self.add(form.parse()?)
    }

    /// Store an already constructed account
    pub fn add(&self, account: Account) -> PaycheckResult<Account> {
        account
            .validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;

        if self.storage.accounts.find_by_name(&account.name)?.is_some() {
            return Err(PaycheckError::Duplicate {
                entity_type: "Account",
                identifier: account.name.trim().to_string(),
            });
        }

        let account = self.storage.accounts.add(account)?;
        info!(id = %account.id, name = %account.name, balance = %account.balance, "account added");
        Ok(account)
    }

    pub fn list(&self) -> PaycheckResult<Vec<Account>> {
        self.storage.accounts.all()
    }

    pub fn get(&self, id: AccountId) -> PaycheckResult<Option<Account>> {
        self.storage.accounts.find_by_id(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> PaycheckResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.find_by_name(identifier)? {
            return Ok(Some(account));
        }
        match identifier.parse::<AccountId>() {
            Ok(id) => self.get(id),
            Err(_) => Ok(None),
        }
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn require(&self, identifier: &str) -> PaycheckResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| PaycheckError::account_not_found(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    fn form(name: &str, kind: &str, balance: &str) -> AccountForm {
        AccountForm {
            name: name.into(),
            account_type: kind.into(),
            balance: balance.into(),
        }
    }

    #[test]
    fn test_create_account() {
        let storage = Storage::in_memory();
        let service = AccountService::new(&storage);

        let account = service
            .create(&form("Chase Checking", "checking", "2450.50"))
            .unwrap();

        assert_eq!(account.account_type, AccountType::Checking);
        assert_eq!(account.balance.cents(), 245050);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_duplicate_name() {
        let storage = Storage::in_memory();
        let service = AccountService::new(&storage);

        service.create(&form("Checking", "checking", "0")).unwrap();
        let err = service
            .create(&form("checking", "savings", "10"))
            .unwrap_err();

        assert!(matches!(err, PaycheckError::Duplicate { .. }));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_form_stores_nothing() {
        let storage = Storage::in_memory();
        let service = AccountService::new(&storage);

        let err = service
            .create(&form("Checking", "checking", "lots"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_find_account() {
        let storage = Storage::in_memory();
        let service = AccountService::new(&storage);
        let created = service
            .create(&form("Savings Account", "savings", "8750"))
            .unwrap();

        assert_eq!(service.find("savings account").unwrap().unwrap().id, created.id);
        let by_id = service
            .find(&created.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(by_id.id, created.id);
        assert!(service.find("Brokerage").unwrap().is_none());
        assert!(service.require("Brokerage").unwrap_err().is_not_found());
    }
}
