//! Output format writers.
//!
//! This module provides writers for the two analysis products:
//! - the derived event table ([`write_table_csv`] / [`write_table_json`])
//! - the aggregate report ([`write_report_json`])
//!
//! CSV output uses a semicolon delimiter. JSON table output is a map from
//! column name to an aligned array of values, which mirrors the in-memory
//! [`columns`](crate::core::table::EventTable::columns) contract; the JSON
//! report serializes [`AnalysisReport`](crate::core::aggregate::AnalysisReport)
//! as-is.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::error::Result<()> {
//! use chatstats::config::{AnalysisConfig, Window};
//! use chatstats::core::aggregate::build_report;
//! use chatstats::core::output::{write_report_json, write_table_csv};
//! use chatstats::core::table::EventTable;
//!
//! let table = EventTable::build(vec![], &AnalysisConfig::new())?;
//! let report = build_report(&table, Window::Weekly);
//!
//! write_table_csv(&table, "table.csv")?;
//! write_report_json(&report, "report.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_table_csv, write_table_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_report_json, to_table_json, write_report_json, write_table_json};
