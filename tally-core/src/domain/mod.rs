//! Core domain entities
//!
//! Accounts, their input validation and the error taxonomy live here. These
//! are plain data structures with validation logic; the only outside
//! dependency is the `StatementStore` port handed in by the caller.

mod account;
pub mod result;
pub mod validation;

pub use account::Account;
pub use result::{Error, ErrorKind, FieldValue, OperationResult, Result};
