//! Account domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::validation::{validate_deposit, validate_new_account, FIELD_AMOUNT};
use crate::ports::StatementStore;

/// Character that makes a statement target unusable
const FORBIDDEN_TARGET_CHAR: char = '*';

/// A ledger account
///
/// Fields are private: an `Account` only exists once its inputs passed
/// validation, and its balance only changes through `withdraw` and
/// `deposit`, so the balance is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    owner: String,
    balance: Decimal,
}

/// Unvalidated account data as read from JSON input
#[derive(Debug, Deserialize)]
struct AccountRecord {
    owner: String,
    balance: Decimal,
}

impl TryFrom<AccountRecord> for Account {
    type Error = Error;

    fn try_from(record: AccountRecord) -> Result<Self> {
        Account::new(record.owner, record.balance)
    }
}

impl Account {
    /// Create an account, rejecting an empty owner or a negative balance
    pub fn new(owner: impl Into<String>, initial_balance: Decimal) -> Result<Self> {
        let owner = owner.into();
        validate_new_account(&owner, initial_balance)?;
        Ok(Self {
            owner,
            balance: initial_balance,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Take `amount` out of the account
    ///
    /// Fails with `Error::InsufficientBalance` when `amount` exceeds the
    /// balance; the balance is untouched in that case. Withdrawing the whole
    /// balance is allowed. A negative amount large enough to overflow the
    /// balance is rejected as an invalid `amount`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            return Err(Error::insufficient_balance(self.balance, amount));
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| out_of_range(amount))?;
        Ok(())
    }

    /// Add `amount` to the account (must be strictly positive)
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        validate_deposit(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| out_of_range(amount))?;
        Ok(())
    }

    /// Plain-text statement for this account
    pub fn statement(&self) -> String {
        format!("Owner: {}\nBalance: {:.2}\n", self.owner, self.balance)
    }

    /// Write this account's statement to `store` under `target`
    pub fn persist_statement(&self, target: &str, store: &dyn StatementStore) -> Result<()> {
        if target.contains(FORBIDDEN_TARGET_CHAR) {
            return Err(Error::persistence(
                target,
                format!("invalid statement name: {}", target),
            ));
        }
        store.persist(target, &self.statement())
    }
}

/// The balance cannot represent the result of applying `amount`
fn out_of_range(amount: Decimal) -> Error {
    Error::validation(FIELD_AMOUNT, amount, "amount would take the balance out of range")
}
