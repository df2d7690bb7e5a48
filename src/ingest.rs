//! Readers for normalized event files.
//!
//! The analysis core expects events that are already normalized: parsed
//! timestamps, one record per message, sorted ascending. This module reads
//! two such representations — a JSON array and a headered CSV — and is
//! deliberately dumb about everything else: no export-format sniffing, no
//! locale detection, no re-sorting. An upstream normalizer owns those
//! concerns; the pipeline rejects unsorted input on its own.
//!
//! # Formats
//!
//! JSON (array of records):
//! ```json
//! [
//!   {"timestamp": "2024-06-15T12:00:00Z", "subject": "Alice", "text": "hi"},
//!   {"timestamp": "2024-06-15T12:05:00Z", "subject": "Bob", "text": "hello"}
//! ]
//! ```
//!
//! CSV (comma-delimited, with header):
//! ```csv
//! timestamp,subject,text
//! 2024-06-15T12:00:00Z,Alice,hi
//! 2024-06-15T12:05:00Z,Bob,hello
//! ```

use std::path::Path;

use crate::error::{ChatstatsError, Result};
use crate::event::MessageEvent;

/// Reads events from a file, choosing the format by extension.
///
/// `.json` files are parsed as a JSON array, everything else as CSV.
///
/// # Errors
///
/// Returns [`ChatstatsError::Io`] when the file cannot be read and
/// [`ChatstatsError::InvalidFormat`] when its contents don't match the
/// expected structure.
#[cfg(all(feature = "json-output", feature = "csv-output"))]
pub fn read_events(path: &Path) -> Result<Vec<MessageEvent>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_events_json(path),
        _ => read_events_csv(path),
    }
}

/// Reads events from a JSON array file.
#[cfg(feature = "json-output")]
pub fn read_events_json(path: &Path) -> Result<Vec<MessageEvent>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ChatstatsError::invalid_format("JSON events", e.to_string()))
}

/// Reads events from a headered CSV file.
///
/// Expects `timestamp`, `subject` and `text` columns; timestamps are
/// RFC 3339.
#[cfg(feature = "csv-output")]
pub fn read_events_csv(path: &Path) -> Result<Vec<MessageEvent>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut events = Vec::new();
    for record in reader.deserialize() {
        let event: MessageEvent =
            record.map_err(|e| ChatstatsError::invalid_format("CSV events", e.to_string()))?;
        events.push(event);
    }
    Ok(events)
}
