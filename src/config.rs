// src/config.rs

use std::{
    fs, io,
    path::PathBuf,
};

/// Filesystem layout for a pipeline run, resolved from a single root
/// directory: CSV exports under `data/`, per-component log files under
/// `logs/`, and the store file inside the data directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_dir = root.join("data");
        let logs_dir = root.join("logs");
        let db_path = data_dir.join("company-inventory.db");
        Self {
            data_dir,
            logs_dir,
            db_path,
        }
    }

    /// Create the log directory if needed. The data directory is never
    /// created here; its absence is the ingestor's fatal condition.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.logs_dir)
    }
}
