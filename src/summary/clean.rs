// src/summary/clean.rs

use duckdb::types::Value;

use super::RawSummaryRow;

/// Fully cleaned and enriched summary row, as written to `vendor_summary`.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorSummaryRow {
    pub vendor_number: i64,
    pub vendor_name: String,
    pub brand: i64,
    pub description: String,
    pub purchase_price: f64,
    pub actual_price: f64,
    pub volume: f64,
    pub total_purchase_quantity: f64,
    pub total_purchase_dollars: f64,
    pub total_sales_quantity: f64,
    pub total_sales_dollars: f64,
    pub total_sales_price: f64,
    pub total_excise_tax: f64,
    pub freight_cost: f64,
    pub gross_profit: f64,
    pub profit_margin: f64,
    pub stock_turnover: f64,
    pub sales_to_purchase_ratio: f64,
}

/// Best-effort numeric view of a store value. Text parses as a number when
/// it can; anything else counts as missing.
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
        Value::TinyInt(v) => Some(f64::from(*v)),
        Value::SmallInt(v) => Some(f64::from(*v)),
        Value::Int(v) => Some(f64::from(*v)),
        Value::BigInt(v) => Some(*v as f64),
        Value::HugeInt(v) => Some(*v as f64),
        Value::UTinyInt(v) => Some(f64::from(*v)),
        Value::USmallInt(v) => Some(f64::from(*v)),
        Value::UInt(v) => Some(f64::from(*v)),
        Value::UBigInt(v) => Some(*v as f64),
        Value::Float(v) => Some(f64::from(*v)),
        Value::Double(v) => Some(*v),
        Value::Decimal(v) => v.to_string().parse().ok(),
        Value::Text(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn fill_zero(value: &Value) -> f64 {
    as_f64(value).unwrap_or(0.0)
}

/// Cleaning and derivation pass over the raw aggregation rows, in a fixed
/// order: coerce `Volume` to a float, fill the remaining missing values with
/// 0 (text included), trim `VendorName`, then derive the profitability
/// columns. Divisions keep IEEE semantics: a zero denominator yields an
/// infinite or NaN ratio, never a panic.
pub fn clean_rows(rows: Vec<RawSummaryRow>) -> Vec<VendorSummaryRow> {
    rows.into_iter().map(clean_row).collect()
}

fn clean_row(row: RawSummaryRow) -> VendorSummaryRow {
    let volume = fill_zero(&row.volume);
    let total_purchase_quantity = fill_zero(&row.total_purchase_quantity);
    let total_purchase_dollars = fill_zero(&row.total_purchase_dollars);
    let total_sales_quantity = fill_zero(&row.total_sales_quantity);
    let total_sales_dollars = fill_zero(&row.total_sales_dollars);

    let gross_profit = total_sales_dollars - total_purchase_dollars;

    VendorSummaryRow {
        vendor_number: row.vendor_number,
        vendor_name: row
            .vendor_name
            .unwrap_or_else(|| "0".to_string())
            .trim()
            .to_string(),
        brand: row.brand,
        description: row.description.unwrap_or_else(|| "0".to_string()),
        purchase_price: fill_zero(&row.purchase_price),
        actual_price: fill_zero(&row.actual_price),
        volume,
        total_purchase_quantity,
        total_purchase_dollars,
        total_sales_quantity,
        total_sales_dollars,
        total_sales_price: fill_zero(&row.total_sales_price),
        total_excise_tax: fill_zero(&row.total_excise_tax),
        freight_cost: fill_zero(&row.freight_cost),
        gross_profit,
        profit_margin: gross_profit / total_sales_dollars * 100.0,
        stock_turnover: total_sales_quantity / total_purchase_quantity,
        sales_to_purchase_ratio: total_sales_dollars / total_purchase_dollars,
    }
}
