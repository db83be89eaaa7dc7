//! Result and error types for the core library

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected input value, kept as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Amount(Decimal),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{:?}", text),
            FieldValue::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Decimal> for FieldValue {
    fn from(amount: Decimal) -> Self {
        Self::Amount(amount)
    }
}

/// Failure class, used by hosts to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Malformed input; the caller can retry with corrected values
    Validation,
    /// Well-formed request rejected by a business rule
    Logic,
    /// Side effect against an external collaborator failed
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Logic => "logic",
            ErrorKind::Io => "io",
        }
    }
}

/// Core library error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid field '{field}' (value: {value}): {message}")]
    Validation {
        field: String,
        value: FieldValue,
        message: String,
    },

    #[error("Insufficient balance: {current_balance} (attempted: {attempted_amount})")]
    InsufficientBalance {
        current_balance: Decimal,
        attempted_amount: Decimal,
    },

    #[error("Could not save statement to '{target}': {message}")]
    Persistence { target: String, message: String },
}

impl Error {
    /// Create a validation error
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<FieldValue>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an insufficient balance error
    pub fn insufficient_balance(current_balance: Decimal, attempted_amount: Decimal) -> Self {
        Self::InsufficientBalance {
            current_balance,
            attempted_amount,
        }
    }

    /// Create a persistence error
    pub fn persistence(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Persistence {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::InsufficientBalance { .. } => ErrorKind::Logic,
            Error::Persistence { .. } => ErrorKind::Io,
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result with optional context (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            context: None,
        }
    }

    /// Create a failed result with context
    pub fn fail_with_context(
        error: impl Into<String>,
        context: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: Some(context),
        }
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail_with_context(e.to_string(), e.context()),
        }
    }
}

impl Error {
    /// Structured fields of the error, keyed the way the JSON output reports them
    pub fn context(&self) -> HashMap<String, serde_json::Value> {
        let mut context = HashMap::new();
        context.insert("kind".to_string(), self.kind().as_str().into());
        match self {
            Error::Validation { field, value, .. } => {
                context.insert("field".to_string(), field.as_str().into());
                context.insert("value".to_string(), serde_json::json!(value));
            }
            Error::InsufficientBalance {
                current_balance,
                attempted_amount,
            } => {
                context.insert("currentBalance".to_string(), current_balance.to_string().into());
                context.insert("attemptedAmount".to_string(), attempted_amount.to_string().into());
            }
            Error::Persistence { target, .. } => {
                context.insert("target".to_string(), target.as_str().into());
            }
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            Error::validation("owner", "", "required").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::insufficient_balance(Decimal::new(100, 0), Decimal::new(200, 0)).kind(),
            ErrorKind::Logic
        );
        assert_eq!(
            Error::persistence("statement_a*.txt", "bad name").kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::validation("initialBalance", Decimal::new(-1, 0), "cannot be negative");
        assert_eq!(
            err.to_string(),
            "Invalid field 'initialBalance' (value: -1): cannot be negative"
        );

        let err = Error::validation("owner", "  ", "required");
        assert_eq!(err.to_string(), "Invalid field 'owner' (value: \"  \"): required");

        let err = Error::insufficient_balance(Decimal::new(5000, 2), Decimal::new(20000, 2));
        assert_eq!(err.to_string(), "Insufficient balance: 50.00 (attempted: 200.00)");
    }

    #[test]
    fn test_operation_result_ok() {
        let result: OperationResult<i32> = OperationResult::ok(42);
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_from_result_carries_context() {
        let err: Result<i32> = Err(Error::insufficient_balance(
            Decimal::new(300, 0),
            Decimal::new(500, 0),
        ));
        let result: OperationResult<i32> = err.into();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Insufficient balance"));

        let context = result.context.unwrap();
        assert_eq!(context["kind"], "logic");
        assert_eq!(context["currentBalance"], "300");
        assert_eq!(context["attemptedAmount"], "500");
    }

    #[test]
    fn test_validation_context_keeps_value() {
        let context = Error::validation("amount", Decimal::ZERO, "must be positive").context();
        assert_eq!(context["kind"], "validation");
        assert_eq!(context["field"], "amount");
        assert_eq!(context["value"], "0");
    }
}
