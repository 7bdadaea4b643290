use anyhow::Result;
use tracing::info;
use vendorpipe::{config::Config, ingest, logging, store};

fn main() -> Result<()> {
    let config = Config::from_root(std::env::current_dir()?);
    config.ensure_dirs()?;
    logging::init_file_logging(&config.logs_dir.join("ingest_data.log"))?;

    let conn = store::open(&config.db_path)?;
    ingest::load_raw_data(&conn, &config.data_dir)?;

    info!("data ingestion completed successfully");
    println!("Data ingestion completed successfully.");
    Ok(())
}
