//! Demo command - walk through the ledger's failure modes

use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;
use tally_core::{Account, Error, LedgerContext};

use super::get_context;
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;

    account_creation(&ctx);
    withdrawals(&ctx)?;
    transfers(&ctx)?;
    report(&ctx)?;

    Ok(())
}

fn heading(title: &str) {
    println!();
    println!("{}", title.bold());
}

fn report_error(e: &Error) {
    output::error(&e.to_string());
    match e {
        Error::Validation { field, value, .. } => {
            println!("  Field: {}", field);
            println!("  Value: {}", value);
        }
        Error::InsufficientBalance {
            current_balance,
            attempted_amount,
        } => {
            println!("  Current balance: {:.2}", current_balance);
            println!("  Attempted: {:.2}", attempted_amount);
        }
        Error::Persistence { target, .. } => {
            println!("  Target: {}", target);
        }
    }
}

/// Validation failures: rejected before any account exists
fn account_creation(ctx: &LedgerContext) {
    heading("1. Account creation (validation failures)");

    for (owner, balance) in [("João Silva", 1000), ("", 500)] {
        match ctx.account_service.create_account(owner, Decimal::new(balance, 0)) {
            Ok(account) => output::success(&format!("Account opened for {}", account.owner())),
            Err(e) => report_error(&e),
        }
    }
}

/// Logic failures: insufficient balance on withdrawal
fn withdrawals(ctx: &LedgerContext) -> Result<()> {
    heading("2. Withdrawals (insufficient balance)");

    let mut account = ctx
        .account_service
        .create_account("Maria Santos", Decimal::new(100, 0))?;

    for amount in [50, 200] {
        match account.withdraw(Decimal::new(amount, 0)) {
            Ok(()) => output::success(&format!(
                "Withdrew {:.2} (balance: {:.2})",
                Decimal::new(amount, 0),
                account.balance()
            )),
            Err(e) => report_error(&e),
        }
    }
    Ok(())
}

/// Transfers: a failed debit moves nothing
fn transfers(ctx: &LedgerContext) -> Result<()> {
    heading("3. Transfers");

    let mut pedro = ctx
        .account_service
        .create_account("Pedro", Decimal::new(300, 0))?;
    let mut ana = ctx
        .account_service
        .create_account("Ana", Decimal::new(200, 0))?;

    for amount in [100, 500] {
        let amount = Decimal::new(amount, 0);
        output::info(&format!(
            "Transferring {:.2} from {} to {}",
            amount,
            pedro.owner(),
            ana.owner()
        ));
        match ctx.transfer_service.transfer(&mut pedro, &mut ana, amount) {
            Ok(_) => output::success("Transfer completed"),
            Err(e) => report_error(&e),
        }
        println!(
            "  {}: {:.2}, {}: {:.2}",
            pedro.owner(),
            pedro.balance(),
            ana.owner(),
            ana.balance()
        );
    }
    Ok(())
}

/// I/O failures: one bad statement target does not stop the report
fn report(ctx: &LedgerContext) -> Result<()> {
    heading("4. Report (per-account statement failures)");

    let accounts = vec![
        Account::new("Cliente 1", Decimal::new(1000, 0))?,
        Account::new("Cliente 2", Decimal::new(2000, 0))?,
        Account::new("Cliente*Invalido", Decimal::new(500, 0))?,
    ];
    let report = ctx.report_service.generate(&accounts);
    super::report::print_report(&report);
    Ok(())
}
