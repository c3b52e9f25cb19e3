//! SQLite storage backend.
//!
//! Entries live in a single `entries` table inside one local database file.
//! Every write goes straight to disk; there is no cache in front of the
//! connection.

mod row;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{LogbookError, Result};
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Entry, EntryFilter};

use row::{encode_timestamp, EntryRow};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        timestamp TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS entries_timestamp
    ON entries (timestamp);
"#;

/// SQLite storage engine.
pub struct SqliteStorage<C: Clock = SystemClock> {
    path: Option<PathBuf>,
    conn: Connection,
    clock: C,
}

impl SqliteStorage<SystemClock> {
    /// Open (creating if absent) the logbook file and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::StorageUnavailable` if the file cannot be
    /// created or opened, or does not hold a usable database.
    pub fn initialize(path: &Path) -> Result<Self> {
        Self::initialize_with_clock(path, SystemClock)
    }
}

impl<C: Clock> SqliteStorage<C> {
    /// Like [`SqliteStorage::initialize`], stamping entries from `clock`.
    pub fn initialize_with_clock(path: &Path, clock: C) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            LogbookError::StorageUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        let storage = Self {
            path: Some(path.to_path_buf()),
            conn,
            clock,
        };
        storage.ensure_schema().map_err(|e| {
            LogbookError::StorageUnavailable(format!("cannot use {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "logbook opened");
        Ok(storage)
    }

    /// Open a throwaway in-memory store.
    pub fn in_memory_with_clock(clock: C) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LogbookError::StorageUnavailable(e.to_string()))?;
        let storage = Self {
            path: None,
            conn,
            clock,
        };
        storage.ensure_schema()?;
        Ok(storage)
    }

    /// Path of the backing file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl<C: Clock> StorageEngine for SqliteStorage<C> {
    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn create(&mut self, content: &str) -> Result<Entry> {
        if content.trim().is_empty() {
            return Err(LogbookError::Validation(
                "Entry content is empty".to_string(),
            ));
        }

        let timestamp = self.clock.now();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO entries (content, timestamp) VALUES (?, ?)",
            (content, encode_timestamp(&timestamp)),
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, bytes = content.len(), "entry created");
        Ok(Entry {
            id,
            content: content.to_string(),
            timestamp,
        })
    }

    fn get(&self, id: i64) -> Result<Option<Entry>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM entries WHERE id = ?", EntryRow::COLUMNS),
                [id],
                EntryRow::from_row,
            )
            .optional()?;

        row.map(Entry::try_from).transpose()
    }

    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        let mut query = format!("SELECT {} FROM entries", EntryRow::COLUMNS);
        if let Some(ref needle) = filter.contains {
            // instr() is case-sensitive, unlike LIKE
            query.push_str(" WHERE instr(content, ?) > 0");
            params.push(Box::new(needle.clone()));
        }
        query.push_str(" ORDER BY timestamp DESC, id DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter()),
            EntryRow::from_row,
        )?;

        let mut entries: Vec<Entry> = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }

        debug!(
            filter = filter.contains.as_deref().unwrap_or(""),
            count = entries.len(),
            "entries listed"
        );
        Ok(entries)
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;

        let exists: Option<i64> = tx
            .query_row("SELECT id FROM entries WHERE id = ?", [id], |row| {
                row.get(0)
            })
            .optional()?;
        if exists.is_none() {
            return Err(LogbookError::EntryNotFound(id));
        }

        tx.execute("DELETE FROM entries WHERE id = ?", [id])?;
        tx.commit()?;

        debug!(id, "entry deleted");
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
