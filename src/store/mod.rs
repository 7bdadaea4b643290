// src/store/mod.rs

use std::path::Path;

use duckdb::Connection;
use tracing::info;

use crate::error::PipelineError;

/// Open the store file at `path`, creating it if it doesn't exist.
pub fn open(path: &Path) -> Result<Connection, PipelineError> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Open an in-memory store.
pub fn open_in_memory() -> Result<Connection, PipelineError> {
    let conn = Connection::open_in_memory()?;
    Ok(conn)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Replace `table_name`'s full contents with the rows of the CSV at
/// `csv_path`. Header handling and per-column types come from the reader's
/// auto-detection, and column order follows the file.
pub fn replace_table_from_csv(
    conn: &Connection,
    table_name: &str,
    csv_path: &Path,
) -> Result<(), PipelineError> {
    let sql = format!(
        "CREATE OR REPLACE TABLE {} AS SELECT * FROM read_csv({});",
        quote_ident(table_name),
        quote_literal(&csv_path.to_string_lossy()),
    );
    conn.execute_batch(&sql)?;
    info!("data ingested into table: {}", table_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn replace_discards_previous_contents() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let csv = dir.path().join("inventory.csv");
        let conn = open_in_memory()?;

        fs::write(&csv, "Brand,Price\n100,9.99\n200,14.5\n300,20.0\n")?;
        replace_table_from_csv(&conn, "inventory", &csv)?;

        fs::write(&csv, "Brand,Price\n400,5.0\n")?;
        replace_table_from_csv(&conn, "inventory", &csv)?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM inventory", [], |r| r.get(0))?;
        assert_eq!(count, 1);
        let brand: i64 = conn.query_row("SELECT Brand FROM inventory", [], |r| r.get(0))?;
        assert_eq!(brand, 400);
        Ok(())
    }

    #[test]
    fn table_names_are_quoted() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let csv = dir.path().join("odd.csv");
        fs::write(&csv, "A\n1\n")?;

        let conn = open_in_memory()?;
        replace_table_from_csv(&conn, "odd table \"x\"", &csv)?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM \"odd table \"\"x\"\"\"",
            [],
            |r| r.get(0),
        )?;
        assert_eq!(count, 1);
        Ok(())
    }
}
