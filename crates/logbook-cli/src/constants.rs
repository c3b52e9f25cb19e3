//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// The logbook file could not be created or opened.
    pub const STORAGE_UNAVAILABLE: i32 = 3;

    /// Invalid configuration or environment.
    pub const INVALID_INPUT: i32 = 4;
}
