//! Storage layer for Mahana Budget
//!
//! Persists the engine's logical keys as JSON documents, either one file per
//! key with atomic writes or in memory.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::{load, save, JsonFileStore, MemoryStore, StorageKey, Store};
