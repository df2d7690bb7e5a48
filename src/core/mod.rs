//! Core analysis pipeline for chatstats.
//!
//! This module contains:
//! - [`filter`] - Event filtering by date range and participant
//! - [`subjects`] - Categorical encoding of participants
//! - [`segment`] - Conversation segmentation over sorted timestamps
//! - [`reply`] - Sender-change and reply detection
//! - [`interval`] - Elapsed-time extraction for flagged events
//! - [`table`] - The derived event table
//! - [`aggregate`] - Windowed resampling and group-by summaries
//! - [`output`] - Format writers (CSV, JSON)
//!
//! Dependency order is fixed: segmentation runs first, reply detection
//! consumes its `conv_change` column, interval extraction produces both
//! latency columns, and aggregation reads the finished table.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{
//!     AnalysisReport, EventTable, FilterConfig,
//!     apply_filters, build_report, winner_by,
//! };
//! ```

pub mod aggregate;
pub mod filter;
pub mod interval;
pub mod output;
pub mod reply;
pub mod segment;
pub mod subjects;
pub mod table;

// Re-export main types for convenience
pub use aggregate::{
    AnalysisReport, BusiestWindow, ConversationStat, SubjectTotals, TimeSeries, WindowedSeries,
    build_report, conversation_size_per_window, conversation_stats, hour_histogram,
    mean_length_per_window, mean_reply_time_per_window, messages_per_window, subject_totals,
    winner_by,
};
pub use filter::{FilterConfig, apply_filters};
pub use interval::{SparseIntervals, extract_intervals, interval_column};
pub use reply::{ReplyFlags, detect_replies};
pub use segment::{Segmentation, segment};
pub use subjects::SubjectRegistry;
pub use table::{Column, EventTable};

// Re-export the event type from the crate root
pub use crate::MessageEvent;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_table_csv, write_table_csv};
#[cfg(feature = "json-output")]
pub use output::{to_report_json, to_table_json, write_report_json, write_table_json};
