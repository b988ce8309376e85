//! String-keyed store contract and in-memory implementation.
//!
//! # Responsibility
//! - Abstract the persistent slot store behind a minimal get/set trait.
//! - Provide an in-memory implementation for tests and ephemeral sessions.
//!
//! # Invariants
//! - Implementations are shared across the caller thread and the bridge
//!   worker, so the trait requires `Send + Sync`.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by key-value store implementations.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite transport or constraint failure.
    Sqlite(rusqlite::Error),
    /// The store's internal lock was poisoned by a panicking writer.
    Poisoned,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Poisoned => write!(f, "key-value store lock poisoned"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Poisoned => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Minimal string-keyed persistent store.
///
/// The core only ever reads and writes whole string values per slot; layout
/// and durability are the implementation's concern.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory store backed by a mutex-guarded map.
///
/// Cloning shares the underlying map, which lets tests keep a handle while
/// the bridge owns another. The write counter exists so debounce behavior
/// can be observed from the outside.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    slots: HashMap<String, String>,
    writes: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `set` calls observed so far.
    pub fn write_count(&self) -> u64 {
        self.inner.lock().map_or(0, |inner| inner.writes)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        inner.slots.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}
