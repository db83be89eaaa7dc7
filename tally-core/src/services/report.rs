//! Report service - account summaries with per-account statements

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::config::Config;
use crate::domain::Account;
use crate::ports::StatementStore;

/// Report service for batch account reports
pub struct ReportService {
    store: Arc<dyn StatementStore>,
    config: Config,
}

impl ReportService {
    pub fn new(store: Arc<dyn StatementStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Build a report over `accounts`, in the given order
    ///
    /// Every account gets a summary line. Each account's statement is then
    /// saved; a failed save is recorded on that account's line and the batch
    /// moves on to the next account. The report itself never fails.
    pub fn generate(&self, accounts: &[Account]) -> Report {
        let _span = info_span!("report", accounts = accounts.len()).entered();
        info!("generating account report");

        let mut lines = Vec::with_capacity(accounts.len());
        let mut saved = 0i64;
        let mut failed = 0i64;

        for account in accounts {
            let target = self.config.statement_target(account.owner());

            let statement = match account.persist_statement(&target, self.store.as_ref()) {
                Ok(()) => {
                    saved += 1;
                    StatementStatus::Saved
                }
                Err(e) => {
                    failed += 1;
                    warn!(owner = account.owner(), error = %e, "statement not saved");
                    StatementStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };

            lines.push(ReportLine {
                owner: account.owner().to_string(),
                balance: account.balance(),
                statement_target: target,
                statement,
            });
        }

        info!(saved, failed, "report completed");

        Report {
            generated_at: Utc::now(),
            lines,
            saved,
            failed,
            completed: true,
        }
    }
}

/// A finished account report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<ReportLine>,
    /// Statements saved
    pub saved: i64,
    /// Statements that could not be saved
    pub failed: i64,
    /// Set once every account has been visited
    pub completed: bool,
}

/// Summary of one account in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub owner: String,
    pub balance: Decimal,
    pub statement_target: String,
    pub statement: StatementStatus,
}

impl ReportLine {
    pub fn statement_failed(&self) -> bool {
        matches!(self.statement, StatementStatus::Failed { .. })
    }
}

/// Whether an account's statement was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatementStatus {
    Saved,
    Failed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStatementStore;

    fn account(owner: &str, balance: i64) -> Account {
        Account::new(owner, Decimal::new(balance, 0)).unwrap()
    }

    #[test]
    fn test_report_keeps_order_and_isolates_failures() {
        let store = Arc::new(InMemoryStatementStore::new());
        let service = ReportService::new(store.clone(), Config::default());

        let accounts = vec![
            account("Cliente 1", 1000),
            account("Cliente*Invalido", 500),
            account("Cliente 2", 2000),
        ];
        let report = service.generate(&accounts);

        let owners: Vec<&str> = report.lines.iter().map(|l| l.owner.as_str()).collect();
        assert_eq!(owners, vec!["Cliente 1", "Cliente*Invalido", "Cliente 2"]);

        assert!(!report.lines[0].statement_failed());
        assert!(report.lines[1].statement_failed());
        assert!(!report.lines[2].statement_failed());
        assert_eq!(report.lines[1].balance, Decimal::new(500, 0));

        assert_eq!(report.saved, 2);
        assert_eq!(report.failed, 1);
        assert!(report.completed);

        assert_eq!(
            store.targets(),
            vec!["statement_cliente 1.txt", "statement_cliente 2.txt"]
        );
    }

    #[test]
    fn test_report_completes_when_every_save_fails() {
        let store = Arc::new(InMemoryStatementStore::new());
        let service = ReportService::new(store, Config::default());

        let accounts = vec![account("a*", 1), account("b*", 2)];
        let report = service.generate(&accounts);

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.failed, 2);
        assert!(report.completed);
    }

    #[test]
    fn test_empty_report() {
        let service = ReportService::new(Arc::new(InMemoryStatementStore::new()), Config::default());
        let report = service.generate(&[]);
        assert!(report.lines.is_empty());
        assert!(report.completed);
    }

    #[test]
    fn test_report_line_serialization() {
        let line = ReportLine {
            owner: "Ana".to_string(),
            balance: Decimal::new(1050, 2),
            statement_target: "statement_ana.txt".to_string(),
            statement: StatementStatus::Failed {
                error: "disk full".to_string(),
            },
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["statementTarget"], "statement_ana.txt");
        assert_eq!(json["statement"]["status"], "failed");
        assert_eq!(json["statement"]["error"], "disk full");
    }
}
