//! Filesystem storage for league sessions.
//!
//! Handles reading and writing the local data directory:
//! - Roster rows (`roster.jsonl`)
//! - The submitted-results log (`results.jsonl`), replayed on startup
//! - Exported sheets, one JSONL file per sheet

pub mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join("roster.jsonl")
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join("results.jsonl")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("export")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.roster_path(), PathBuf::from("/data/roster.jsonl"));
        assert_eq!(config.results_path(), PathBuf::from("/data/results.jsonl"));
        assert_eq!(config.export_dir(), PathBuf::from("/data/export"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
