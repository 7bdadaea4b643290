// src/summary/mod.rs

pub mod clean;

use duckdb::{params, types::Value, Connection};
use tracing::info;

use crate::error::PipelineError;

pub use clean::{clean_rows, VendorSummaryRow};

/// Aggregation over the ingested source tables: freight by vendor, purchases
/// by vendor and brand (only rows with an actual purchase price), sales by
/// vendor and brand. Left joins from the purchase side keep brands that never
/// sold; their sales and freight columns come back null.
const VENDOR_SUMMARY_QUERY: &str = r#"
WITH

FreightSummary AS (
    SELECT
        VendorNumber, SUM(Freight) AS FreightCost
    FROM
        vendor_invoice
    GROUP BY
        VendorNumber
),

PurchaseSummary AS (
    SELECT
        p1.VendorNumber, p1.VendorName, p1.Brand, p1.Description, p1.PurchasePrice,
        SUM(p1.Quantity) AS TotalPurchaseQuantity,
        SUM(p1.Dollars) AS TotalPurchaseDollars,
        p2.Price AS ActualPrice, p2.Volume
    FROM
        purchases p1
    JOIN
        purchase_prices p2
    ON
        p1.Brand = p2.Brand
    WHERE
        p1.PurchasePrice > 0
    GROUP BY
        p1.VendorNumber, p1.VendorName, p1.Brand, p1.Description, p1.PurchasePrice, p2.Price, p2.Volume
),

SalesSummary AS (
    SELECT
        VendorNo, Brand,
        SUM(SalesQuantity) AS TotalSalesQuantity,
        SUM(SalesDollars) AS TotalSalesDollars,
        SUM(SalesPrice) AS TotalSalesPrice,
        SUM(ExciseTax) AS TotalExciseTax
    FROM
        sales
    GROUP BY
        VendorNo, Brand
)

SELECT
    ps.VendorNumber, ps.VendorName, ps.Brand, ps.Description, ps.PurchasePrice, ps.ActualPrice, ps.Volume,
    ps.TotalPurchaseQuantity, ps.TotalPurchaseDollars,
    ss.TotalSalesQuantity, ss.TotalSalesDollars, ss.TotalSalesPrice, ss.TotalExciseTax,
    fs.FreightCost
FROM
    PurchaseSummary ps
LEFT JOIN
    SalesSummary ss
ON
    (ps.VendorNumber = ss.VendorNo) AND (ps.Brand = ss.Brand)
LEFT JOIN
    FreightSummary fs
ON
    ps.VendorNumber = fs.VendorNumber
ORDER BY
    ps.TotalPurchaseDollars DESC
"#;

/// One result row of the aggregation query, before cleaning. Numeric columns
/// stay as raw store values because their concrete types depend on what the
/// CSV reader inferred for the source tables (integer sums arrive as
/// HUGEINT, `Volume` is sometimes text).
#[derive(Debug, Clone)]
pub struct RawSummaryRow {
    pub vendor_number: i64,
    pub vendor_name: Option<String>,
    pub brand: i64,
    pub description: Option<String>,
    pub purchase_price: Value,
    pub actual_price: Value,
    pub volume: Value,
    pub total_purchase_quantity: Value,
    pub total_purchase_dollars: Value,
    pub total_sales_quantity: Value,
    pub total_sales_dollars: Value,
    pub total_sales_price: Value,
    pub total_excise_tax: Value,
    pub freight_cost: Value,
}

/// Run the vendor summary aggregation and materialize its rows in query
/// order (descending total purchase dollars).
pub fn build_vendor_summary(conn: &Connection) -> Result<Vec<RawSummaryRow>, PipelineError> {
    let mut stmt = conn.prepare(VENDOR_SUMMARY_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(RawSummaryRow {
            vendor_number: row.get(0)?,
            vendor_name: row.get(1)?,
            brand: row.get(2)?,
            description: row.get(3)?,
            purchase_price: row.get(4)?,
            actual_price: row.get(5)?,
            volume: row.get(6)?,
            total_purchase_quantity: row.get(7)?,
            total_purchase_dollars: row.get(8)?,
            total_sales_quantity: row.get(9)?,
            total_sales_dollars: row.get(10)?,
            total_sales_price: row.get(11)?,
            total_excise_tax: row.get(12)?,
            freight_cost: row.get(13)?,
        })
    })?;
    let rows = rows.collect::<duckdb::Result<Vec<_>>>()?;
    Ok(rows)
}

const VENDOR_SUMMARY_TABLE: &str = "vendor_summary";

const CREATE_VENDOR_SUMMARY: &str = "
CREATE OR REPLACE TABLE vendor_summary (
    VendorNumber BIGINT,
    VendorName VARCHAR,
    Brand BIGINT,
    Description VARCHAR,
    PurchasePrice DOUBLE,
    ActualPrice DOUBLE,
    Volume DOUBLE,
    TotalPurchaseQuantity DOUBLE,
    TotalPurchaseDollars DOUBLE,
    TotalSalesQuantity DOUBLE,
    TotalSalesDollars DOUBLE,
    TotalSalesPrice DOUBLE,
    TotalExciseTax DOUBLE,
    FreightCost DOUBLE,
    GrossProfit DOUBLE,
    ProfitMargin DOUBLE,
    StockTurnover DOUBLE,
    SalesToPurchaseRatio DOUBLE
);
";

/// Replace the `vendor_summary` table with the cleaned rows, preserving
/// their order. Non-finite ratios are stored as-is.
pub fn write_vendor_summary(
    conn: &Connection,
    rows: &[VendorSummaryRow],
) -> Result<(), PipelineError> {
    conn.execute_batch(CREATE_VENDOR_SUMMARY)?;

    let mut appender = conn.appender(VENDOR_SUMMARY_TABLE)?;
    for row in rows {
        appender.append_row(params![
            row.vendor_number,
            row.vendor_name,
            row.brand,
            row.description,
            row.purchase_price,
            row.actual_price,
            row.volume,
            row.total_purchase_quantity,
            row.total_purchase_dollars,
            row.total_sales_quantity,
            row.total_sales_dollars,
            row.total_sales_price,
            row.total_excise_tax,
            row.freight_cost,
            row.gross_profit,
            row.profit_margin,
            row.stock_turnover,
            row.sales_to_purchase_ratio,
        ])?;
    }
    appender.flush()?;

    info!("data ingested into table: {}", VENDOR_SUMMARY_TABLE);
    Ok(())
}
