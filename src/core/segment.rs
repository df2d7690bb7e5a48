//! Conversation segmentation.
//!
//! A conversation is a maximal run of consecutive events whose inter-event
//! gaps never exceed a threshold. [`segment`] walks the sorted timestamp
//! sequence once, computes the gap at every index and assigns a
//! non-decreasing conversation id to each event.
//!
//! # Example
//!
//! ```
//! use chatstats::core::segment::segment;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let timestamps = vec![
//!     base,
//!     base + Duration::minutes(5),
//!     base + Duration::minutes(120), // gap > 60min, new conversation
//! ];
//!
//! let seg = segment(&timestamps, 60.0)?;
//! assert_eq!(seg.conv_id, vec![0, 0, 1]);
//! assert_eq!(seg.conv_change, vec![false, false, true]);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::{DateTime, Utc};

use crate::error::{ChatstatsError, Result};

/// Minutes elapsed between two timestamps, at millisecond resolution.
pub(crate) fn minutes_between(prev: DateTime<Utc>, next: DateTime<Utc>) -> f64 {
    (next - prev).num_milliseconds() as f64 / 60_000.0
}

/// Conversation assignment for an event sequence.
///
/// Both columns always have exactly the length of the input sequence.
/// `conv_id` starts at 0 and is non-decreasing; it increases by exactly 1
/// at each index where `conv_change` is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Conversation id per event.
    pub conv_id: Vec<u64>,

    /// `true` at the first event of every conversation except the first.
    pub conv_change: Vec<bool>,
}

impl Segmentation {
    /// Number of events covered by this segmentation.
    pub fn len(&self) -> usize {
        self.conv_id.len()
    }

    /// Returns `true` for an empty segmentation.
    pub fn is_empty(&self) -> bool {
        self.conv_id.is_empty()
    }

    /// Number of conversations (last id + 1, or 0 when empty).
    pub fn conversation_count(&self) -> u64 {
        self.conv_id.last().map_or(0, |last| last + 1)
    }
}

/// Assigns conversation ids over a sorted timestamp sequence.
///
/// The gap at index 0 is defined as 0: the first event can never start a
/// "change", it seeds conversation 0. For `i > 0` a gap strictly greater
/// than `threshold_minutes` marks a conversation change, and `conv_id` is
/// the running count of changes seen so far. Trailing gapless regions keep
/// the last assigned id because the counter simply stops incrementing; the
/// output is computed at exactly length `n`, never padded after the fact.
///
/// # Errors
///
/// Returns [`ChatstatsError::InvalidOrdering`] at the first index whose
/// timestamp precedes its predecessor.
pub fn segment(timestamps: &[DateTime<Utc>], threshold_minutes: f64) -> Result<Segmentation> {
    let n = timestamps.len();
    let mut conv_id = Vec::with_capacity(n);
    let mut conv_change = Vec::with_capacity(n);

    let mut current_id: u64 = 0;
    for (i, &ts) in timestamps.iter().enumerate() {
        let changed = if i == 0 {
            false
        } else {
            let prev = timestamps[i - 1];
            let gap = minutes_between(prev, ts);
            if gap < 0.0 {
                return Err(ChatstatsError::invalid_ordering(i, prev, ts));
            }
            gap > threshold_minutes
        };

        if changed {
            current_id += 1;
        }
        conv_id.push(current_id);
        conv_change.push(changed);
    }

    Ok(Segmentation {
        conv_id,
        conv_change,
    })
}
