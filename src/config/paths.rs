//! Path management for Mahana Budget
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `MAHANA_DATA_DIR` environment variable (if set)
//! 3. The platform data directory, e.g. `~/.local/share/mahana` on Linux

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::MahanaError;

pub const DATA_DIR_ENV: &str = "MAHANA_DATA_DIR";

/// Manages all paths used by Mahana Budget
#[derive(Debug, Clone)]
pub struct MahanaPaths {
    base_dir: PathBuf,
}

impl MahanaPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MahanaError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MahanaPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Use `explicit` when given, otherwise resolve as in [`MahanaPaths::new`]
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, MahanaError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding one JSON file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path of the JSON file backing a storage key
    pub fn key_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    pub fn ensure_directories(&self) -> Result<(), MahanaError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MahanaError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if anything has been saved yet
    pub fn is_initialized(&self) -> bool {
        self.data_dir().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, MahanaError> {
    ProjectDirs::from("", "", "mahana")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MahanaError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MahanaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.key_file("transactions"),
            temp_dir.path().join("data").join("transactions.json")
        );
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MahanaPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MahanaPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
        assert!(paths.is_initialized());
    }
}
