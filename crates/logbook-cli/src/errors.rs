//! CLI error types for structured error handling.
//!
//! Startup failures map to specific exit codes; everything after startup is
//! reported inside the session and never ends the process.

use std::fmt;

use logbook_core::LogbookError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// The logbook file cannot be opened or created
    StorageUnavailable { message: String, hint: String },

    /// Bad configuration or environment
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::StorageUnavailable { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a StorageUnavailable error for the given logbook path.
    pub fn storage_unavailable(path: &str, err: &LogbookError) -> Self {
        CliError::StorageUnavailable {
            message: format!("Cannot open logbook at {}", path),
            hint: format!(
                "Hint: {}. Check permissions or pass another path with --logbook.",
                err
            ),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::StorageUnavailable { .. } => exit_codes::STORAGE_UNAVAILABLE,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
