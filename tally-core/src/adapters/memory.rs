//! In-memory statement store
//!
//! Stands in for a real statement destination: every write is kept in memory
//! so callers and tests can inspect what would have been saved.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::ports::StatementStore;

/// A statement accepted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedStatement {
    pub target: String,
    pub contents: String,
}

/// Statement store that keeps everything in memory
#[derive(Debug, Default)]
pub struct InMemoryStatementStore {
    saved: Mutex<Vec<SavedStatement>>,
}

impl InMemoryStatementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements saved so far, in write order
    pub fn saved(&self) -> Vec<SavedStatement> {
        match self.saved.lock() {
            Ok(saved) => saved.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Target names saved so far, in write order
    pub fn targets(&self) -> Vec<String> {
        self.saved().into_iter().map(|s| s.target).collect()
    }
}

impl StatementStore for InMemoryStatementStore {
    fn persist(&self, target: &str, contents: &str) -> Result<()> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|e| Error::persistence(target, format!("Lock poisoned: {}", e)))?;

        saved.push(SavedStatement {
            target: target.to_string(),
            contents: contents.to_string(),
        });
        debug!(target_name = target, bytes = contents.len(), "statement saved");
        Ok(())
    }
}
