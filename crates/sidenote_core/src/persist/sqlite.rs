//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Implement the slot store over a single `slots` table.
//! - Bootstrap pragmas and schema before the connection is usable.
//!
//! # Invariants
//! - Returned stores have `foreign_keys=ON` and the schema applied.
//! - The connection is mutex-guarded; the bridge worker and the caller
//!   thread may touch the store concurrently.

use super::kv::{KeyValueStore, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Key-value store persisted in a local SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a database file and prepares the slot schema.
    ///
    /// # Side effects
    /// - Emits `kv_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=persist status=start mode=file");
        let result = Connection::open(path)
            .map_err(StoreError::from)
            .and_then(Self::from_connection);
        log_open_outcome("file", started_at, &result);
        result
    }

    /// Opens an in-memory database, mainly for tests and throwaway sessions.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=persist status=start mode=memory");
        let result = Connection::open_in_memory()
            .map_err(StoreError::from)
            .and_then(Self::from_connection);
        log_open_outcome("memory", started_at, &result);
        result
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE IF NOT EXISTS slots (
                key   TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
             );",
        )?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let value = conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn log_open_outcome(mode: &str, started_at: Instant, result: &StoreResult<SqliteStore>) {
    match result {
        Ok(_) => info!(
            "event=kv_open module=persist status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=kv_open module=persist status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
}
