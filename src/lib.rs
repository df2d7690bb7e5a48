//! # Chatstats
//!
//! A Rust library for deriving conversation structure and activity
//! statistics from chat message logs.
//!
//! ## Overview
//!
//! Chatstats takes a chronologically ordered sequence of normalized
//! [`MessageEvent`]s and computes structural facts about the conversation:
//!
//! - **Segmentation** — where one conversation ends and the next begins,
//!   based on a configurable inter-message gap threshold
//! - **Reply detection** — which messages answer the previous sender, and
//!   how long those replies took
//! - **Aggregation** — weekly/daily activity series, per-participant
//!   totals, conversation sizes and hour-of-day distributions, all derived
//!   from one table so the figures stay mutually consistent
//!
//! The whole pipeline is pure and single-threaded: one invocation owns one
//! event table, derives its columns in a fixed order, and returns plain
//! tabular data for a presentation layer to render.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! fn main() -> Result<()> {
//!     let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//!     let events = vec![
//!         MessageEvent::new(base, "Alice", "lunch tomorrow?"),
//!         MessageEvent::new(base + Duration::minutes(3), "Bob", "sure, where?"),
//!         MessageEvent::new(base + Duration::minutes(200), "Alice", "new topic"),
//!     ];
//!
//!     // Derive conversation ids, reply flags and latencies
//!     let table = EventTable::build(events, &AnalysisConfig::new())?;
//!     assert_eq!(table.conversation_count(), 2);
//!     assert_eq!(table.is_reply(), &[false, true, false]);
//!
//!     // Aggregate into the report consumed by presentation layers
//!     let report = build_report(&table, Window::Weekly);
//!     let talker = winner_by(&report.subject_totals, |t| t.message_count as f64);
//!     assert_eq!(talker.unwrap().subject, "Alice");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`event`] — [`MessageEvent`], the normalized input record
//! - [`config`] — [`AnalysisConfig`](config::AnalysisConfig) and
//!   [`Window`](config::Window)
//! - [`core`] — the analysis pipeline
//!   - [`core::segment`] — conversation segmentation
//!   - [`core::reply`] — sender-change and reply flags
//!   - [`core::interval`] — elapsed-time extraction
//!   - [`core::table`] — [`EventTable`](core::table::EventTable), the
//!     derived column set
//!   - [`core::aggregate`] — windowed series, group-by totals, winners
//!   - [`core::filter`] — date-range and participant filters
//!   - [`core::output`] — CSV/JSON writers for table and report
//! - [`ingest`] — readers for normalized event files
//! - [`format`] — library-first output format types
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod format;
#[cfg(any(feature = "json-output", feature = "csv-output"))]
pub mod ingest;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use event::MessageEvent;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core event type
    pub use crate::MessageEvent;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, Window};

    // Pipeline
    pub use crate::core::segment::{Segmentation, segment};
    pub use crate::core::reply::{ReplyFlags, detect_replies};
    pub use crate::core::interval::{SparseIntervals, extract_intervals, interval_column};
    pub use crate::core::subjects::SubjectRegistry;
    pub use crate::core::table::{Column, EventTable};

    // Aggregation
    pub use crate::core::aggregate::{
        AnalysisReport, BusiestWindow, SubjectTotals, build_report, subject_totals, winner_by,
    };

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_table_csv, write_table_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{
        to_report_json, to_table_json, write_report_json, write_table_json,
    };

    // Formats
    pub use crate::format::TableFormat;
}
