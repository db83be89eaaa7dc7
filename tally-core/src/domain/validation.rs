//! Input validation for account construction and deposits
//!
//! These checks run before any account state exists or changes, so a
//! rejected value never leaves a partially built or partially updated account.

use rust_decimal::Decimal;

use super::result::{Error, Result};

/// Field names reported in validation failures
pub const FIELD_OWNER: &str = "owner";
pub const FIELD_INITIAL_BALANCE: &str = "initialBalance";
pub const FIELD_AMOUNT: &str = "amount";

/// Validate the inputs of a new account
///
/// The owner is checked before the balance, so an input that is wrong on
/// both counts reports the owner.
pub fn validate_new_account(owner: &str, initial_balance: Decimal) -> Result<()> {
    if owner.trim().is_empty() {
        return Err(Error::validation(
            FIELD_OWNER,
            owner,
            "account owner is required",
        ));
    }
    if initial_balance < Decimal::ZERO {
        return Err(Error::validation(
            FIELD_INITIAL_BALANCE,
            initial_balance,
            "initial balance cannot be negative",
        ));
    }
    Ok(())
}

/// Validate a deposit amount (strictly positive)
pub fn validate_deposit(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::validation(
            FIELD_AMOUNT,
            amount,
            "deposit amount must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: Error) -> String {
        match err {
            Error::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_owner_required() {
        for owner in ["", " ", "\t\n"] {
            let err = validate_new_account(owner, Decimal::new(100, 0)).unwrap_err();
            assert_eq!(field_of(err), "owner");
        }
    }

    #[test]
    fn test_negative_initial_balance_rejected() {
        let err = validate_new_account("Ana", Decimal::new(-1, 0)).unwrap_err();
        assert_eq!(
            err,
            Error::validation(
                "initialBalance",
                Decimal::new(-1, 0),
                "initial balance cannot be negative"
            )
        );

        let err = validate_new_account("Ana", Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(field_of(err), "initialBalance");
    }

    #[test]
    fn test_owner_checked_first() {
        let err = validate_new_account("", Decimal::new(-5, 0)).unwrap_err();
        assert_eq!(field_of(err), "owner");
    }

    #[test]
    fn test_valid_account_inputs() {
        assert!(validate_new_account("Ana", Decimal::ZERO).is_ok());
        assert!(validate_new_account("Ana", Decimal::new(100050, 2)).is_ok());
        // Negative zero is still zero
        assert!(validate_new_account("Ana", -Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_deposit_must_be_positive() {
        for amount in [Decimal::ZERO, Decimal::new(-1, 2), Decimal::new(-100, 0)] {
            let err = validate_deposit(amount).unwrap_err();
            assert_eq!(field_of(err), "amount");
        }
        assert!(validate_deposit(Decimal::new(1, 2)).is_ok());
    }
}
