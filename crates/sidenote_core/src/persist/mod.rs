//! Persistence layer: key-value contract, codec and debounced bridge.
//!
//! # Responsibility
//! - Define the string-keyed store contract the core persists through.
//! - Keep serialization details and write scheduling out of store/view code.
//!
//! # Invariants
//! - Corrupt persisted state degrades to safe defaults; loading never fails.
//! - Only the most recent snapshot is ever written; pending debounced writes
//!   are superseded, not queued.

pub mod bridge;
pub mod codec;
pub mod kv;
pub mod sqlite;
