//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external collaborators. The domain and
//! services depend only on these traits, not on concrete implementations.

mod statement_store;

pub use statement_store::StatementStore;
