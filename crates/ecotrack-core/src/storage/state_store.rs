//! SQLite-backed persistence for the tracker state.
//!
//! The engine never touches storage itself; callers load a snapshot, run
//! operations, and save the result back. The snapshot is the JSON form of
//! [`TrackerState`] kept in a small key-value table.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::tracker::TrackerState;

const STATE_KEY: &str = "tracker_state";

/// SQLite store holding one tracker snapshot.
pub struct StateStore {
    conn: Connection,
}

impl StateStore {
    /// Open the store at `~/.config/ecotrack/ecotrack.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("ecotrack.db");
        Self::open_at(&path)
    }

    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Last saved snapshot, if any.
    ///
    /// # Errors
    /// Fails on query errors and on snapshots that break an engine invariant.
    pub fn load(&self) -> Result<Option<TrackerState>> {
        match self.kv_get(STATE_KEY)? {
            Some(json) => Ok(Some(TrackerState::from_json(&json)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, state: &TrackerState) -> Result<()> {
        let json = state.to_json()?;
        self.kv_set(STATE_KEY, &json)?;
        debug!(bytes = json.len(), "tracker state saved");
        Ok(())
    }

    /// Drop the saved snapshot.
    pub fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![STATE_KEY])?;
        Ok(())
    }
}
