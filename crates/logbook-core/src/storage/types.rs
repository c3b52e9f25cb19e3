//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier, never reused after deletion
    pub id: i64,

    /// Free-text body, never empty
    pub content: String,

    /// When this entry was created
    pub timestamp: DateTime<Utc>,
}

/// Filter for querying entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-sensitive substring the content must contain
    pub contains: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to entries containing `needle`.
    ///
    /// An empty needle matches everything and is stored as no filter.
    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.contains = if needle.is_empty() { None } else { Some(needle) };
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build a filter from an optional search string.
    pub fn from_query(query: Option<&str>) -> Self {
        match query {
            Some(q) => Self::new().contains(q),
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_filter_builder() {
        let filter = EntryFilter::new().contains("milk").limit(10);

        assert_eq!(filter.contains, Some("milk".to_string()));
        assert_eq!(filter.limit, Some(10));
    }

    #[test]
    fn test_empty_needle_is_no_filter() {
        assert_eq!(EntryFilter::new().contains(""), EntryFilter::new());
        assert_eq!(EntryFilter::from_query(Some("")), EntryFilter::new());
        assert_eq!(EntryFilter::from_query(None), EntryFilter::new());
    }

    #[test]
    fn test_needle_is_not_trimmed() {
        let filter = EntryFilter::from_query(Some(" mom "));
        assert_eq!(filter.contains.as_deref(), Some(" mom "));
    }
}
