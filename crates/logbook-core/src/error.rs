//! Error types for Logbook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to short user-facing messages.

use thiserror::Error;

/// Result type alias for Logbook operations.
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Core error type for Logbook operations.
#[derive(Debug, Error)]
pub enum LogbookError {
    /// The backing file could not be created, opened, or read as a database.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Entry not found by ID
    #[error("Entry not found: {0}")]
    EntryNotFound(i64),
}

impl LogbookError {
    /// Whether this error reports a missing entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogbookError::EntryNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = LogbookError::EntryNotFound(42);
        assert_eq!(err.to_string(), "Entry not found: 42");
        assert!(err.is_not_found());
        assert!(!LogbookError::StorageUnavailable("gone".to_string()).is_not_found());
    }

    #[test]
    fn test_sqlite_error_converts() {
        let err: LogbookError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, LogbookError::Sqlite { .. }));
    }
}
