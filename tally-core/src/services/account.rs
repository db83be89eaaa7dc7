//! Account service - account creation

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{Account, Result};

/// Account service for opening accounts
#[derive(Debug, Default)]
pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        Self
    }

    /// Open an account for `owner` with `initial_balance`
    ///
    /// Returns the validation failure unchanged when the inputs are rejected;
    /// no account exists in that case.
    pub fn create_account(&self, owner: &str, initial_balance: Decimal) -> Result<Account> {
        info!(owner, %initial_balance, "creating account");
        Account::new(owner, initial_balance).map_err(|e| {
            warn!(owner, error = %e, "account rejected");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;

    #[test]
    fn test_create_account() {
        let service = AccountService::new();
        let account = service
            .create_account("João Silva", Decimal::new(1000, 0))
            .unwrap();
        assert_eq!(account.owner(), "João Silva");
        assert_eq!(account.balance(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_create_account_empty_owner() {
        let service = AccountService::new();
        let err = service.create_account("", Decimal::new(500, 0)).unwrap_err();
        match err {
            Error::Validation {
                field,
                value,
                message,
            } => {
                assert_eq!(field, "owner");
                assert_eq!(value.to_string(), "\"\"");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
