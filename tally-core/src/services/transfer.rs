//! Transfer service - moving funds between two accounts

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{Account, Result};

/// Transfer service for account-to-account transfers
#[derive(Debug, Default)]
pub struct TransferService;

impl TransferService {
    pub fn new() -> Self {
        Self
    }

    /// Move `amount` from `source` to `destination`
    ///
    /// The source is always debited first. If the debit fails, neither
    /// account changes and the debit error is returned.
    ///
    /// If the debit succeeds but the credit is rejected, the credit error is
    /// returned as-is and **the source stays debited**: there is no
    /// compensating credit. Callers that see a validation error from this
    /// method must treat the debit as already applied.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<TransferSummary> {
        info!(
            source = source.owner(),
            destination = destination.owner(),
            %amount,
            "transferring funds"
        );

        source.withdraw(amount)?;

        if let Err(e) = destination.deposit(amount) {
            warn!(
                source = source.owner(),
                destination = destination.owner(),
                %amount,
                error = %e,
                "credit failed after debit; source was not refunded"
            );
            return Err(e);
        }

        info!(
            source_balance = %source.balance(),
            destination_balance = %destination.balance(),
            "transfer completed"
        );

        Ok(TransferSummary {
            source: source.owner().to_string(),
            destination: destination.owner().to_string(),
            amount,
            source_balance: source.balance(),
            destination_balance: destination.balance(),
        })
    }
}

/// Outcome of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSummary {
    pub source: String,
    pub destination: String,
    pub amount: Decimal,
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
}
