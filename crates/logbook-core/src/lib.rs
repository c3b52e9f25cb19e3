//! # Logbook Core
//!
//! Core library for Logbook - a personal, CLI-first logbook of timestamped
//! free-text entries.
//!
//! This crate provides the persistence and query layer independent of the
//! interactive CLI.
//!
//! ## Architecture
//!
//! - **storage**: Storage engine trait and the SQLite implementation
//! - **clock**: Time source used to stamp new entries
//! - **error**: Error taxonomy shared by all operations

pub mod clock;
pub mod error;
pub mod storage;

pub use clock::{Clock, SystemClock};
pub use error::{LogbookError, Result};
pub use storage::{Entry, EntryFilter, SqliteStorage, StorageEngine};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
