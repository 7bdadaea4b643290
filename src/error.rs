//! Error taxonomy for the pipeline.
//!
//! Only the missing-directory case aborts an ingestion run; a store failure
//! for a single file is contained by the ingest loop, while store failures in
//! the summary stage propagate to the entry point.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The configured data directory does not exist.
    #[error("the directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Listing the data directory failed.
    #[error("reading data directory: {0}")]
    Io(#[from] std::io::Error),

    /// A query or table write against the store failed.
    #[error("store error: {0}")]
    Store(#[from] duckdb::Error),
}
