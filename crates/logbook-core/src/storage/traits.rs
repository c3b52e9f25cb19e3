//! Storage engine trait definition.
//!
//! The `StorageEngine` trait is the seam between the interactive session and
//! the backing file. The session only ever talks to this trait.

use super::types::{Entry, EntryFilter};
use crate::error::Result;

/// Storage engine interface for logbook entries.
///
/// All implementations must ensure:
/// - Writes are durable and visible to the next query
/// - Entry IDs are never reused, even after deletion
/// - Timestamps are assigned by the store and never changed
pub trait StorageEngine {
    /// Ensure the entry schema exists.
    ///
    /// Safe to call on an already-initialized store; existing entries are
    /// left untouched.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a new entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::Validation` if `content` is blank after trimming.
    fn create(&mut self, content: &str) -> Result<Entry>;

    /// Get an entry by ID.
    ///
    /// Returns `Ok(None)` if not found.
    fn get(&self, id: i64) -> Result<Option<Entry>>;

    /// List entries matching the filter.
    ///
    /// Entries are returned newest first; entries sharing a timestamp are
    /// ordered by most recent insertion first.
    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Permanently delete an entry.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::EntryNotFound` if `id` does not exist.
    fn delete(&mut self, id: i64) -> Result<()>;

    /// Number of stored entries.
    fn count(&self) -> Result<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_storage_engine<T: StorageEngine>(_engine: &mut T) {}
    }
}
