//! Statement store port - where per-account statements are written

use crate::domain::result::Result;

/// Destination for account statements
///
/// The ledger only cares whether a write succeeded and, if not, why. Storage
/// format and location are up to the implementation. Failures must be
/// reported as `Error::Persistence`.
pub trait StatementStore: Send + Sync {
    /// Persist the statement text under the given target name
    fn persist(&self, target: &str, contents: &str) -> Result<()>;
}
