// src/ingest/mod.rs

use std::{fs, path::Path, time::Instant};

use duckdb::Connection;
use tracing::{error, info};

use crate::{error::PipelineError, store};

/// Load every `*.csv` file in `data_dir` into the store, one table per file,
/// replacing any table of the same name.
///
/// A file that fails to parse or ingest is logged and skipped; earlier
/// successes are kept. The run only aborts when `data_dir` itself is missing.
pub fn load_raw_data(conn: &Connection, data_dir: &Path) -> Result<(), PipelineError> {
    if !data_dir.exists() {
        return Err(PipelineError::DirectoryNotFound(data_dir.to_path_buf()));
    }

    let start = Instant::now();
    info!("starting data ingestion from {}", data_dir.display());

    for entry in fs::read_dir(data_dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(".csv") {
            continue;
        }

        // Table name is everything before the first dot, so `sales.2024.csv`
        // lands in table `sales`.
        let table_name = file_name.split('.').next().unwrap_or(&file_name);

        info!("ingesting file {} into table {}", file_name, table_name);
        if let Err(e) = store::replace_table_from_csv(conn, table_name, &entry.path()) {
            error!("error processing file {}: {}", file_name, e);
        }
    }

    info!(
        "data ingestion completed in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
