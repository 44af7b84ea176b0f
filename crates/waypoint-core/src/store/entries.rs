//! Entry queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_ENTRY_SQL: &str = "SELECT value FROM entries WHERE key = ?1";
const UPSERT_ENTRY_SQL: &str = "INSERT INTO entries (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Retrieves the value stored under a key.
    pub fn get_entry(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_ENTRY_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query entry")
    }

    /// Inserts or replaces the value stored under a key.
    pub fn put_entry(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_ENTRY_SQL, params![key, value, now])
            .db_context("Failed to write entry")?;
        Ok(())
    }
}
