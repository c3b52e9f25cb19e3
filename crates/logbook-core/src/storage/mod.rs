//! Storage abstraction for Logbook.
//!
//! This module defines the `StorageEngine` trait and core types for
//! persisting and querying logbook entries.
//!
//! The backing store is a single local SQLite file holding one `entries`
//! table. The store is opened once per process and owned by the caller.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{Entry, EntryFilter};
