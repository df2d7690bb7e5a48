//! Elapsed-time extraction for flagged events.
//!
//! Generic two-step pattern shared by reply-latency and
//! inter-conversation-time computation: first extract the sparse minutes
//! between each flagged event and its immediate predecessor, then scatter
//! those values back into a dense zero-filled column. Both derived columns
//! go through exactly the same code path, so rounding, zero default and
//! index alignment are identical by construction.
//!
//! # Example
//!
//! ```
//! use chatstats::core::interval::extract_intervals;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let timestamps = vec![base, base + Duration::minutes(5), base + Duration::minutes(10)];
//! let flags = [false, true, true];
//!
//! let sparse = extract_intervals(&timestamps, &flags)?;
//! assert_eq!(sparse.values, vec![5.0, 5.0]);
//! assert_eq!(sparse.positions, vec![1, 2]);
//!
//! let dense = sparse.scatter(timestamps.len());
//! assert_eq!(dense, vec![0.0, 5.0, 5.0]);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::{DateTime, Utc};

use crate::core::segment::minutes_between;
use crate::error::{ChatstatsError, Result};

/// Sparse elapsed-time values for flagged indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseIntervals {
    /// Minutes between each flagged event and its predecessor.
    pub values: Vec<f64>,

    /// Indices the values belong to, in ascending order.
    pub positions: Vec<usize>,
}

impl SparseIntervals {
    /// Scatters the sparse values into a dense column of length `n`.
    ///
    /// Non-flagged indices get 0. The zero is a placeholder for "not
    /// applicable", not a measured latency of zero; aggregation code that
    /// averages these columns must skip the unflagged rows.
    pub fn scatter(&self, n: usize) -> Vec<f64> {
        let mut dense = vec![0.0; n];
        for (&pos, &value) in self.positions.iter().zip(&self.values) {
            dense[pos] = value;
        }
        dense
    }

    /// Number of flagged indices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` when no index was flagged.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Extracts minutes elapsed since the previous event at every flagged index.
///
/// Works for any boolean flag column whose index 0 is never set — both
/// callers (`is_reply`, `conv_change`) guarantee that by construction.
///
/// # Errors
///
/// Returns [`ChatstatsError::Precondition`] when the columns have different
/// lengths or when index 0 is flagged (it has no predecessor).
pub fn extract_intervals(
    timestamps: &[DateTime<Utc>],
    flags: &[bool],
) -> Result<SparseIntervals> {
    if timestamps.len() != flags.len() {
        return Err(ChatstatsError::precondition(format!(
            "timestamps column has length {} but flag column has length {}",
            timestamps.len(),
            flags.len()
        )));
    }
    if flags.first().copied().unwrap_or(false) {
        return Err(ChatstatsError::precondition(
            "flag column is set at index 0, which has no predecessor",
        ));
    }

    let mut values = Vec::new();
    let mut positions = Vec::new();
    for (i, &flagged) in flags.iter().enumerate() {
        if flagged {
            values.push(minutes_between(timestamps[i - 1], timestamps[i]));
            positions.push(i);
        }
    }

    Ok(SparseIntervals { values, positions })
}

/// Extracts and scatters in one step, producing the dense zero-filled column.
pub fn interval_column(timestamps: &[DateTime<Utc>], flags: &[bool]) -> Result<Vec<f64>> {
    Ok(extract_intervals(timestamps, flags)?.scatter(timestamps.len()))
}
