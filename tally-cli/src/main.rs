//! Tally CLI - account ledger in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;
mod logging;
mod output;

use commands::{config, demo, open, report, transfer};

/// Tally - account ledger in your terminal
#[derive(Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and open an account
    Open {
        /// Account owner
        owner: String,
        /// Initial balance
        #[arg(allow_negative_numbers = true)]
        initial_balance: Decimal,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transfer funds between two accounts listed in a JSON file
    Transfer {
        /// Accounts file: [{"owner": "...", "balance": "..."}]
        file: PathBuf,
        /// Owner of the source account
        #[arg(long)]
        from: String,
        /// Owner of the destination account
        #[arg(long)]
        to: String,
        /// Amount to transfer
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize accounts and save their statements
    Report {
        /// Accounts file: [{"owner": "...", "balance": "..."}]
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change how statement targets are named
    Config {
        /// Prefix placed before the lower-cased owner name
        #[arg(long)]
        prefix: Option<String>,
        /// Statement extension (without the dot)
        #[arg(long)]
        extension: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through validation, balance and statement failures
    Demo,
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Open { owner, initial_balance, json } => open::run(&owner, initial_balance, json),
        Commands::Transfer { file, from, to, amount, json } => {
            transfer::run(&file, &from, &to, amount, json)
        }
        Commands::Report { file, json } => report::run(&file, json),
        Commands::Config { prefix, extension, json } => config::run(prefix, extension, json),
        Commands::Demo => demo::run(),
    }
}
