//! Persistent key-value storage backed by SQLite.
//!
//! Everything waypoint remembers between runs (settings, history and cached
//! plans) is a string value under a string key. [`KeyValueStore`] is the
//! seam the rest of the crate depends on; [`Database`] is the SQLite
//! implementation.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod entries;
pub mod schema;
pub mod settings;

pub use settings::{load_settings, save_settings};

/// Key under which user settings are stored.
pub const SETTINGS_KEY: &str = "settings";

/// Key under which the history ledger is stored.
pub const HISTORY_KEY: &str = "history";

/// Minimal string key-value storage.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_entry(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.put_entry(key, value)
    }
}
