//! Report command - account summaries and statements

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use tally_core::services::{Report, StatementStatus};
use tally_core::OperationResult;

use super::{get_context, load_accounts, print_json};
use crate::output;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let accounts = load_accounts(file)?;

    let report = ctx.report_service.generate(&accounts);

    if json {
        // Statement failures are part of the report, not a command failure
        return print_json(&OperationResult::ok(report));
    }

    print_report(&report);
    Ok(())
}

/// Print a report as a table followed by its completion line
pub fn print_report(report: &Report) {
    println!("{}", "Account Report".bold());

    let mut table = output::create_table();
    table.set_header(vec!["Owner", "Balance", "Statement"]);

    for line in &report.lines {
        let statement = match &line.statement {
            StatementStatus::Saved => Cell::new(&line.statement_target),
            StatementStatus::Failed { error } => {
                Cell::new(format!("not saved: {}", error)).fg(comfy_table::Color::Red)
            }
        };
        table.add_row(vec![
            Cell::new(&line.owner),
            Cell::new(format!("{:.2}", line.balance)),
            statement,
        ]);
    }
    println!("{}", table);

    if report.failed > 0 {
        output::warning(&format!(
            "{} statement(s) could not be saved",
            report.failed
        ));
    }
    if report.completed {
        output::success(&format!(
            "Report completed: {} account(s), {} statement(s) saved",
            report.lines.len(),
            report.saved
        ));
    }
}
