//! Output format types for the chatstats library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks. These types are suitable for use in library code, WASM
//! builds, and other contexts where CLI dependencies are not desired.
//!
//! # Example
//!
//! ```rust
//! use chatstats::format::TableFormat;
//! use std::str::FromStr;
//!
//! let format = TableFormat::from_str("json").unwrap();
//! assert_eq!(format, TableFormat::Json);
//! assert_eq!(format.extension(), "json");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::table::EventTable;
use crate::error::ChatstatsError;

/// Output format for the derived event table.
///
/// - [`Csv`](TableFormat::Csv) - semicolon-delimited rows, one per event
/// - [`Json`](TableFormat::Json) - column map, one aligned array per column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TableFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON column map
    Json,
}

impl TableFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::TableFormat;
    ///
    /// assert_eq!(TableFormat::Csv.extension(), "csv");
    /// assert_eq!(TableFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::TableFormat;
    ///
    /// let format = TableFormat::from_path("table.json").unwrap();
    /// assert_eq!(format, TableFormat::Json);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatstatsError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            _ => Err(ChatstatsError::InvalidFormat {
                format: "output",
                message: format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json",
                    ext
                ),
            }),
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "CSV"),
            TableFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                TableFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the derived table to a file in the specified format.
///
/// This is a convenience function that selects the appropriate writer
/// based on the format enum.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_table(
    table: &EventTable,
    path: &str,
    format: TableFormat,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        TableFormat::Csv => crate::core::output::write_table_csv(table, path),
        #[cfg(feature = "json-output")]
        TableFormat::Json => crate::core::output::write_table_json(table, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatsError::InvalidFormat {
            format: "output",
            message: format!(
                "Table format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    TableFormat::Csv => "csv-output",
                    TableFormat::Json => "json-output",
                }
            ),
        }),
    }
}
