//! JSON output writers for the derived table and the aggregate report.

use std::fs::File;
use std::io::Write;

use serde_json::{Map, Value};

use crate::core::aggregate::AnalysisReport;
use crate::core::table::EventTable;
use crate::error::Result;

/// Writes the derived table to a JSON file.
///
/// # Format
/// ```json
/// {
///   "timestamp": ["2024-06-15T12:30:00Z", ...],
///   "subject": ["Alice", ...],
///   "conv_id": [0, ...],
///   ...
/// }
/// ```
/// Every array has the table's length; key order follows
/// [`EventTable::columns`].
pub fn write_table_json(table: &EventTable, output_path: &str) -> Result<()> {
    let json = to_table_json(table)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the derived table to a JSON string.
///
/// Same format as [`write_table_json`], but returns a String instead of
/// writing to a file.
pub fn to_table_json(table: &EventTable) -> Result<String> {
    let mut map = Map::new();
    for (name, column) in table.columns() {
        map.insert(name, serde_json::to_value(&column)?);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}

/// Writes the aggregate report to a JSON file.
pub fn write_report_json(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let json = to_report_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the aggregate report to a pretty-printed JSON string.
pub fn to_report_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
