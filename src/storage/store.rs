//! Key-value persistence
//!
//! The engine persists five logical keys. A [`Store`] saves and loads them as
//! opaque JSON values; [`load`] and [`save`] add typed conversion and turn
//! every failure into a logged, non-fatal outcome.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::paths::MahanaPaths;
use crate::error::{MahanaError, MahanaResult};

use super::file_io::{read_json, write_json_atomic};

/// The logical keys the engine reads at startup and writes after mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Transactions,
    BudgetLimits,
    CycleStartDay,
    Categories,
    Settings,
}

impl StorageKey {
    pub fn all() -> &'static [Self] {
        &[
            Self::Transactions,
            Self::BudgetLimits,
            Self::CycleStartDay,
            Self::Categories,
            Self::Settings,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::BudgetLimits => "budgetLimits",
            Self::CycleStartDay => "cycleStartDay",
            Self::Categories => "categories",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence collaborator
pub trait Store {
    /// Read the value stored under `key`, `None` if nothing was saved yet
    fn load_value(&self, key: StorageKey) -> MahanaResult<Option<Value>>;

    fn save_value(&self, key: StorageKey, value: Value) -> MahanaResult<()>;
}

/// Load a typed value, falling back to `default` when missing or unreadable
pub fn load<T: DeserializeOwned>(store: &dyn Store, key: StorageKey, default: T) -> T {
    match store.load_value(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(%key, error = %e, "stored value has an unexpected shape, using default");
                default
            }
        },
        Ok(None) => {
            debug!(%key, "nothing stored yet, using default");
            default
        }
        Err(e) => {
            warn!(%key, error = %e, "failed to load, using default");
            default
        }
    }
}

/// Save a typed value, reporting success
///
/// Failures are logged and swallowed; the caller's in-memory state stays
/// authoritative.
pub fn save<T: Serialize + ?Sized>(store: &dyn Store, key: StorageKey, value: &T) -> bool {
    let value = match serde_json::to_value(value) {
        Ok(value) => value,
        Err(e) => {
            warn!(%key, error = %e, "failed to serialize value");
            return false;
        }
    };

    match store.save_value(key, value) {
        Ok(()) => {
            debug!(%key, "saved");
            true
        }
        Err(e) => {
            warn!(%key, error = %e, "failed to save, keeping in-memory state");
            false
        }
    }
}

/// One pretty-printed JSON file per key under the data directory
pub struct JsonFileStore {
    paths: MahanaPaths,
}

impl JsonFileStore {
    pub fn new(paths: MahanaPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &MahanaPaths {
        &self.paths
    }
}

impl Store for JsonFileStore {
    fn load_value(&self, key: StorageKey) -> MahanaResult<Option<Value>> {
        read_json(self.paths.key_file(key.as_str()))
    }

    fn save_value(&self, key: StorageKey, value: Value) -> MahanaResult<()> {
        write_json_atomic(self.paths.key_file(key.as_str()), &value)
    }
}

/// In-process store, used by tests and embedders that persist elsewhere
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<StorageKey, Value>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves always fail
    pub fn read_only() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn insert(&self, key: StorageKey, value: Value) -> MahanaResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| MahanaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        values.insert(key, value);
        Ok(())
    }

    pub fn contains(&self, key: StorageKey) -> bool {
        self.values
            .read()
            .map(|values| values.contains_key(&key))
            .unwrap_or(false)
    }
}

impl Store for MemoryStore {
    fn load_value(&self, key: StorageKey) -> MahanaResult<Option<Value>> {
        let values = self
            .values
            .read()
            .map_err(|e| MahanaError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values.get(&key).cloned())
    }

    fn save_value(&self, key: StorageKey, value: Value) -> MahanaResult<()> {
        if self.read_only {
            return Err(MahanaError::Storage(format!(
                "Store is read-only, cannot save {}",
                key
            )));
        }
        self.insert(key, value)
    }
}
