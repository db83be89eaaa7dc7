//! Config command - show or change statement naming

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tally_core::config::Config;
use tally_core::OperationResult;

use super::{get_data_dir, print_json};

pub fn run(prefix: Option<String>, extension: Option<String>, json: bool) -> Result<()> {
    let data_dir = get_data_dir()?;
    let mut config = Config::load(&data_dir)?;

    let changed = prefix.is_some() || extension.is_some();
    if let Some(prefix) = prefix {
        config.statement_prefix = prefix;
    }
    if let Some(extension) = extension {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            bail!("Statement extension cannot be empty");
        }
        config.statement_extension = extension.to_string();
    }

    if changed {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
        config.save(&data_dir)?;
    }

    if json {
        return print_json(&OperationResult::ok(serde_json::json!({
            "statementPrefix": config.statement_prefix,
            "statementExtension": config.statement_extension,
            "example": config.statement_target("Ana"),
        })));
    }

    if changed {
        println!("{}", "Settings saved".green());
    }
    println!("Statement prefix:    {}", config.statement_prefix);
    println!("Statement extension: {}", config.statement_extension);
    println!("Example target:      {}", config.statement_target("Ana").dimmed());
    Ok(())
}
