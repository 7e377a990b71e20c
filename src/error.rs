//! Crate-wide error type
//!
//! Report rendering only fails when the output cannot be written
//! (`Export`). The ledger, importer and preference store add their own
//! variants so the CLI can tell a bad argument from a broken data file.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    /// `config.json` missing fields or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input: amounts, period labels, preference values
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Whole-file CSV import failure; bad rows are reported per row instead
    #[error("Import error: {0}")]
    Import(String),

    /// Writing a report artifact or ledger dump failed
    #[error("Export error: {0}")]
    Export(String),

    /// Ledger or preference file could not be read or replaced
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Preferences error: {0}")]
    Preferences(String),
}

impl ExpenseError {
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the caller can fix the error by changing its input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_message() {
        let err = ExpenseError::Export("disk full".into());
        assert_eq!(err.to_string(), "Export error: disk full");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_unknown_expense_id() {
        let err = ExpenseError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_and_json_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(ExpenseError::from(io_err), ExpenseError::Io(_)));

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ExpenseError::from(json_err), ExpenseError::Json(_)));
    }
}
