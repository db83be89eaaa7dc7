//! Open command - validate and create an account

use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;
use tally_core::{Error, OperationResult};

use super::{get_context, print_json};
use crate::output;

pub fn run(owner: &str, initial_balance: Decimal, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = ctx.account_service.create_account(owner, initial_balance);

    if json {
        return print_json(&OperationResult::from(result));
    }

    match result {
        Ok(account) => {
            output::success(&format!("Account opened for {}", account.owner()));
            println!("  Balance: {:.2}", account.balance());
            Ok(())
        }
        Err(e) => {
            if let Error::Validation { field, value, .. } = &e {
                println!("  {} {}", "Field:".bold(), field);
                println!("  {} {}", "Value:".bold(), value);
            }
            Err(e.into())
        }
    }
}
