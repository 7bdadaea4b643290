use std::time::Instant;

use anyhow::Result;
use tracing::info;
use vendorpipe::{config::Config, logging, store, summary};

fn main() -> Result<()> {
    let config = Config::from_root(std::env::current_dir()?);
    config.ensure_dirs()?;
    logging::init_file_logging(&config.logs_dir.join("vendor_summary.log"))?;

    let conn = store::open(&config.db_path)?;

    let start = Instant::now();

    info!("creating vendor summary table");
    let raw = summary::build_vendor_summary(&conn)?;
    info!("vendor summary table created");

    info!("cleaning data");
    let rows = summary::clean_rows(raw);
    info!("data cleaned");

    info!("ingesting data to database");
    summary::write_vendor_summary(&conn, &rows)?;
    info!("data ingested to database");

    info!(
        "total time taken: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );

    println!("Vendor summary created successfully.");
    Ok(())
}
