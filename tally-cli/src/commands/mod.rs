//! CLI command implementations

pub mod config;
pub mod demo;
pub mod open;
pub mod report;
pub mod transfer;

use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tally_core::{Account, LedgerContext, OperationResult};

/// Get the tally data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TALLY_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".tally"))
        .ok_or_else(|| anyhow!("Could not find home directory; set TALLY_DIR"))
}

/// Get ledger context
pub fn get_context() -> Result<LedgerContext> {
    let data_dir = get_data_dir()?;
    LedgerContext::new(&data_dir).context("Failed to initialize ledger context")
}

/// Read accounts from a JSON file: `[{"owner": "Ana", "balance": "100.00"}]`
///
/// Every entry goes through account validation; one bad entry fails the load.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read accounts file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid accounts file: {:?}", path))
}

/// Print an operation result as JSON, exiting with code 1 on failure
pub fn print_json<T: Serialize>(output: &OperationResult<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    if !output.success {
        exit(1);
    }
    Ok(())
}
