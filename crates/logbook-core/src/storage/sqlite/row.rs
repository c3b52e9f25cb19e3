//! Entry row type for database queries.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{LogbookError, Result};
use crate::storage::types::Entry;

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub content: String,
    pub timestamp: String,
}

impl EntryRow {
    pub const COLUMNS: &'static str = "id, content, timestamp";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = LogbookError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| LogbookError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Entry {
            id: row.id,
            content: row.content,
            timestamp,
        })
    }
}

/// Fixed-width UTC encoding so that text order matches time order.
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}
