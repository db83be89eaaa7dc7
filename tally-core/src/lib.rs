//! Tally Core - account ledger logic
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Accounts, input validation and the error taxonomy
//! - **ports**: Trait definitions for external collaborators (StatementStore)
//! - **services**: Account creation, transfers and batch reports
//! - **adapters**: Concrete implementations (in-memory statement store)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::InMemoryStatementStore;
use config::Config;
use ports::StatementStore;
use services::*;

// Re-export commonly used types at crate root
pub use domain::{Account, Error, ErrorKind, FieldValue, OperationResult};

/// Main context for Tally operations
///
/// Holds the configuration, the statement store and all services.
pub struct LedgerContext {
    pub config: Config,
    pub statement_store: Arc<dyn StatementStore>,
    pub account_service: AccountService,
    pub transfer_service: TransferService,
    pub report_service: ReportService,
}

impl LedgerContext {
    /// Create a context from the data directory, saving statements in memory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        Ok(Self::with_store(config, Arc::new(InMemoryStatementStore::new())))
    }

    /// Create a context around a caller-supplied statement store
    pub fn with_store(config: Config, statement_store: Arc<dyn StatementStore>) -> Self {
        let account_service = AccountService::new();
        let transfer_service = TransferService::new();
        let report_service = ReportService::new(Arc::clone(&statement_store), config.clone());

        Self {
            config,
            statement_store,
            account_service,
            transfer_service,
            report_service,
        }
    }
}
