//! Custom error types for paycheck-cli
//!
//! Everything that can fail at the crate boundary funnels into
//! [`PaycheckError`]. Degenerate arithmetic (zero bills, zero income) is not
//! an error; the projection layer represents it with sentinel values.

use thiserror::Error;

/// The main error type for paycheck-cli operations
#[derive(Error, Debug)]
pub enum PaycheckError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected entity input (bad amount, bad date, empty field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Session file and lock errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PaycheckError {
    /// Build a validation error scoped to a single form field
    pub fn invalid_field(field: &str, message: impl std::fmt::Display) -> Self {
        Self::Validation(format!("{}: {}", field, message))
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for bills
    pub fn bill_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bill",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for incomes
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for coasting expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PaycheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaycheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for paycheck-cli operations
pub type PaycheckResult<T> = Result<T, PaycheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaycheckError::Config("bad settings".into());
        assert_eq!(err.to_string(), "Configuration error: bad settings");
    }

    #[test]
    fn test_invalid_field() {
        let err = PaycheckError::invalid_field("amount", "not a number");
        assert_eq!(err.to_string(), "Validation error: amount: not a number");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = PaycheckError::bill_not_found("Rent");
        assert_eq!(err.to_string(), "Bill not found: Rent");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PaycheckError = io_err.into();
        assert!(matches!(err, PaycheckError::Io(_)));
    }
}
