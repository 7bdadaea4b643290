//! Batch pipeline that loads inventory CSV exports into an embedded DuckDB
//! store and derives a per-vendor profitability summary from them.
//!
//! Two entry points, run in order:
//! - `ingest_data` loads every CSV in the data directory, one table per file
//! - `vendor_summary` aggregates purchases, sales and freight into the
//!   `vendor_summary` table

pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod store;
pub mod summary;
