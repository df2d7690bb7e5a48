//! The derived event table.
//!
//! [`EventTable`] is the product of one analysis run: the input events plus
//! every derived column, all index-aligned and of identical length. It is
//! built in a fixed dependency order — segmentation, then reply detection,
//! then interval extraction — and is immutable afterwards.
//!
//! # Example
//!
//! ```
//! use chatstats::config::AnalysisConfig;
//! use chatstats::core::table::EventTable;
//! use chatstats::MessageEvent;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let events = vec![
//!     MessageEvent::new(base, "Alice", "hello there"),
//!     MessageEvent::new(base + Duration::minutes(5), "Bob", "hi"),
//! ];
//!
//! let table = EventTable::build(events, &AnalysisConfig::new())?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.is_reply(), &[false, true]);
//! assert_eq!(table.reply_time(), &[0.0, 5.0]);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::interval::interval_column;
use crate::core::reply::detect_replies;
use crate::core::segment::segment;
use crate::core::subjects::SubjectRegistry;
use crate::error::{ChatstatsError, Result};
use crate::event::MessageEvent;

/// One named, aligned column of derived values.
///
/// Serializes untagged, so a column renders as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    /// Boolean flags.
    Bool(Vec<bool>),
    /// Unsigned counters (conversation ids, indicators, word counts).
    UInt(Vec<u64>),
    /// Real-valued minutes.
    Float(Vec<f64>),
    /// Participant names.
    Str(Vec<String>),
    /// Event timestamps.
    Timestamp(Vec<DateTime<Utc>>),
}

impl Column {
    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Bool(v) => v.len(),
            Column::UInt(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Str(v) => v.len(),
            Column::Timestamp(v) => v.len(),
        }
    }

    /// Returns `true` for a zero-row column.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The event sequence plus every derived column of one analysis run.
///
/// All columns have length [`len()`](EventTable::len). Conversations are a
/// virtual grouping: the maximal runs of equal `conv_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTable {
    events: Vec<MessageEvent>,
    registry: SubjectRegistry,
    subject_id: Vec<usize>,
    message_length: Vec<u32>,
    conv_id: Vec<u64>,
    conv_change: Vec<bool>,
    sender_changed: Vec<bool>,
    is_reply: Vec<bool>,
    reply_time: Vec<f64>,
    inter_conv_time: Vec<f64>,
}

impl EventTable {
    /// Runs the full derivation pipeline over a sorted event sequence.
    ///
    /// Component order is fixed: the segmenter validates ordering and
    /// produces `conv_id`/`conv_change`; the reply detector consumes
    /// `conv_change`; the interval extractor produces both latency columns
    /// through one shared code path.
    ///
    /// Empty and single-event sequences are valid and produce empty and
    /// single-row tables.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidOrdering`] when timestamps are not
    /// sorted non-decreasing.
    pub fn build(events: Vec<MessageEvent>, config: &AnalysisConfig) -> Result<Self> {
        let timestamps: Vec<DateTime<Utc>> = events.iter().map(|e| e.timestamp).collect();

        let segmentation = segment(&timestamps, config.threshold_minutes)?;
        let (registry, subject_id) = SubjectRegistry::encode(&events);
        let flags = detect_replies(&subject_id, &segmentation.conv_change)?;

        let reply_time = interval_column(&timestamps, &flags.is_reply)?;
        let inter_conv_time = interval_column(&timestamps, &segmentation.conv_change)?;

        let message_length = events.iter().map(MessageEvent::word_count).collect();

        Ok(Self {
            events,
            registry,
            subject_id,
            message_length,
            conv_id: segmentation.conv_id,
            conv_change: segmentation.conv_change,
            sender_changed: flags.sender_changed,
            is_reply: flags.is_reply,
            reply_time,
            inter_conv_time,
        })
    }

    // =========================================================================
    // Row access
    // =========================================================================

    /// Number of events in the table.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` for an empty table.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The input events, in order.
    pub fn events(&self) -> &[MessageEvent] {
        &self.events
    }

    /// Timestamp of the event at `index`.
    pub fn timestamp(&self, index: usize) -> DateTime<Utc> {
        self.events[index].timestamp
    }

    /// Enforces a caller-supplied minimum dataset size.
    ///
    /// The core itself is happy with 0 or 1 events; hosts that need a floor
    /// for meaningful aggregation call this and map the error to a friendly
    /// message.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InsufficientData`] when the table holds
    /// fewer than `required` events.
    pub fn require_min_events(&self, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(ChatstatsError::insufficient_data(required, self.len()));
        }
        Ok(())
    }

    // =========================================================================
    // Derived columns
    // =========================================================================

    /// Participant registry (first-appearance order).
    pub fn registry(&self) -> &SubjectRegistry {
        &self.registry
    }

    /// Participant names in first-appearance order.
    pub fn subjects(&self) -> &[String] {
        self.registry.names()
    }

    /// Dense subject id per event.
    pub fn subject_id(&self) -> &[usize] {
        &self.subject_id
    }

    /// Word count per event.
    pub fn message_length(&self) -> &[u32] {
        &self.message_length
    }

    /// Conversation id per event (non-decreasing, starts at 0).
    pub fn conv_id(&self) -> &[u64] {
        &self.conv_id
    }

    /// Conversation-change flag per event.
    pub fn conv_change(&self) -> &[bool] {
        &self.conv_change
    }

    /// Sender-change flag per event.
    pub fn sender_changed(&self) -> &[bool] {
        &self.sender_changed
    }

    /// Reply flag per event.
    pub fn is_reply(&self) -> &[bool] {
        &self.is_reply
    }

    /// Reply latency in minutes; 0 at non-reply rows.
    pub fn reply_time(&self) -> &[f64] {
        &self.reply_time
    }

    /// Gap before a conversation start in minutes; 0 elsewhere.
    pub fn inter_conv_time(&self) -> &[f64] {
        &self.inter_conv_time
    }

    /// Number of conversations in the table.
    pub fn conversation_count(&self) -> u64 {
        self.conv_id.last().map_or(0, |last| last + 1)
    }

    // =========================================================================
    // Tabular export
    // =========================================================================

    /// Exports the full derived column set as ordered `(name, column)` pairs.
    ///
    /// All columns share the table's length and row order. One 0/1
    /// indicator column is appended per participant, named after the
    /// participant, with exactly one indicator set per row.
    pub fn columns(&self) -> Vec<(String, Column)> {
        let mut columns = vec![
            (
                "timestamp".to_string(),
                Column::Timestamp(self.events.iter().map(|e| e.timestamp).collect()),
            ),
            (
                "subject".to_string(),
                Column::Str(self.events.iter().map(|e| e.subject.clone()).collect()),
            ),
            (
                "message_length".to_string(),
                Column::UInt(self.message_length.iter().map(|&l| u64::from(l)).collect()),
            ),
            ("conv_id".to_string(), Column::UInt(self.conv_id.clone())),
            (
                "conv_change".to_string(),
                Column::Bool(self.conv_change.clone()),
            ),
            (
                "sender_changed".to_string(),
                Column::Bool(self.sender_changed.clone()),
            ),
            ("is_reply".to_string(), Column::Bool(self.is_reply.clone())),
            (
                "reply_time".to_string(),
                Column::Float(self.reply_time.clone()),
            ),
            (
                "inter_conv_time".to_string(),
                Column::Float(self.inter_conv_time.clone()),
            ),
        ];

        for (id, name) in self.registry.names().iter().enumerate() {
            let indicator = self
                .subject_id
                .iter()
                .map(|&sid| u64::from(sid == id))
                .collect();
            columns.push((name.clone(), Column::UInt(indicator)));
        }

        columns
    }
}
