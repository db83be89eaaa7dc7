//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory StatementStore (default store, also used by tests)

pub mod memory;

pub use memory::{InMemoryStatementStore, SavedStatement};
