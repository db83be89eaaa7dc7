//! Transfer command - move funds between two accounts from a file

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use rust_decimal::Decimal;
use tally_core::{Account, OperationResult};

use super::{get_context, load_accounts, print_json};
use crate::output;

pub fn run(file: &Path, from: &str, to: &str, amount: Decimal, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let mut accounts = load_accounts(file)?;
    let (source, destination) = find_pair(&mut accounts, from, to)?;

    let balance_before = source.balance();
    let result = ctx.transfer_service.transfer(source, destination, amount);
    let source_debited = result.is_err() && source.balance() != balance_before;

    if json {
        let mut output = OperationResult::from(result);
        if let Some(context) = output.context.as_mut() {
            context.insert("sourceDebited".to_string(), source_debited.into());
            context.insert("sourceBalance".to_string(), source.balance().to_string().into());
        }
        return print_json(&output);
    }

    let mut table = output::create_table();
    table.set_header(vec!["Account", "Balance"]);
    table.add_row(vec![source.owner().to_string(), format!("{:.2}", source.balance())]);
    table.add_row(vec![destination.owner().to_string(), format!("{:.2}", destination.balance())]);

    match result {
        Ok(summary) => {
            output::success(&format!(
                "Transferred {:.2} from {} to {}",
                summary.amount, summary.source, summary.destination
            ));
            println!("{}", table);
            Ok(())
        }
        Err(e) => {
            if source_debited {
                output::warning(&format!(
                    "{} was debited but {} was not credited; no refund was made",
                    source.owner(),
                    destination.owner()
                ));
                println!("{}", table);
            }
            Err(e.into())
        }
    }
}

/// Borrow the source and destination accounts by owner name
fn find_pair<'a>(
    accounts: &'a mut [Account],
    from: &str,
    to: &str,
) -> Result<(&'a mut Account, &'a mut Account)> {
    let position = |owner: &str| {
        accounts
            .iter()
            .position(|a| a.owner() == owner)
            .ok_or_else(|| anyhow!("Account not found: {}", owner))
    };
    let source = position(from)?;
    let destination = position(to)?;

    if source == destination {
        bail!("Source and destination must be different accounts");
    }

    if source < destination {
        let (left, right) = accounts.split_at_mut(destination);
        Ok((&mut left[source], &mut right[0]))
    } else {
        let (left, right) = accounts.split_at_mut(source);
        Ok((&mut right[0], &mut left[destination]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("Pedro", Decimal::new(300, 0)).unwrap(),
            Account::new("Ana", Decimal::new(200, 0)).unwrap(),
            Account::new("Joao", Decimal::new(100, 0)).unwrap(),
        ]
    }

    #[test]
    fn test_find_pair_in_both_orders() {
        let mut accounts = accounts();
        let (source, destination) = find_pair(&mut accounts, "Joao", "Pedro").unwrap();
        assert_eq!(source.owner(), "Joao");
        assert_eq!(destination.owner(), "Pedro");

        let (source, destination) = find_pair(&mut accounts, "Pedro", "Ana").unwrap();
        assert_eq!(source.owner(), "Pedro");
        assert_eq!(destination.owner(), "Ana");
    }

    #[test]
    fn test_find_pair_errors() {
        let mut accounts = accounts();
        assert!(find_pair(&mut accounts, "Pedro", "Pedro").is_err());
        assert!(find_pair(&mut accounts, "Pedro", "Nobody").is_err());
    }
}
