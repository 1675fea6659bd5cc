//! Filesystem dataset operations.
//!
//! League data lives in JSONL files under the data directory:
//! - `championships.jsonl`: season results (overrides the built-in list)
//! - `head_to_head.jsonl`: pairwise matchup records
//! - `games.jsonl`: weekly game results for power rankings
//! - `all_time_records.jsonl`: record boards (overrides the built-in list)

mod dataset;
mod jsonl;

pub use dataset::*;
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

    pub fn dataset_path(&self, dataset: DatasetFile) -> PathBuf {
        self.data_dir.join(dataset.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
