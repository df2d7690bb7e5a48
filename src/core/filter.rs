//! Filter events by date range and participant.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering event collections before analysis.
//! Filtering happens on the raw event sequence; the pipeline then derives
//! its columns from whatever survives, so a filtered run is internally
//! consistent (conversation ids, reply flags and aggregates all describe
//! the filtered sequence).
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Events on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Events on or before date |
//! | Subjects | [`with_subject`](FilterConfig::with_subject) | Events from named participants |
//!
//! # Examples
//!
//! ## Filter by Participant
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::MessageEvent;
//! use chrono::Utc;
//!
//! let events = vec![
//!     MessageEvent::new(Utc::now(), "Alice", "Hello"),
//!     MessageEvent::new(Utc::now(), "Bob", "Hi there"),
//!     MessageEvent::new(Utc::now(), "Alice", "How are you?"),
//! ];
//!
//! // Case-insensitive participant matching
//! let config = FilterConfig::new().with_subject("alice");
//! let filtered = apply_filters(events, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::MessageEvent;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> chatstats::error::Result<()> {
//! let events = vec![
//!     MessageEvent::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "Alice", "Old"),
//!     MessageEvent::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(), "Alice", "New"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(events, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Subject matching is case-insensitive for ASCII characters
//! - Multiple subjects combine with OR; filters combine with AND
//! - Filtering preserves the input order, so a sorted sequence stays sorted

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ChatstatsError;
use crate::event::MessageEvent;

/// Configuration for filtering events by date and participant.
///
/// Filters are combined with AND logic: an event must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatstats::core::filter::FilterConfig;
///
/// # fn main() -> chatstats::error::Result<()> {
/// // Keep two participants within a date range
/// let config = FilterConfig::new()
///     .with_subject("Alice")
///     .with_subject("Bob")
///     .with_date_from("2024-06-01")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only events on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only events on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only events from these participants (case-insensitive).
    /// Empty means no participant filter.
    pub subjects: Vec<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all events pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Only events on or after this date will be included.
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        self.after = Some(parse_date_start(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// Only events on or before this date will be included.
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ChatstatsError::invalid_date(date_str))?;

        // End of the day to include the full day
        let naive_dt = naive.and_hms_opt(23, 59, 59).unwrap();
        self.before = Some(naive_dt.and_utc());
        Ok(self)
    }

    /// Adds a participant to keep.
    ///
    /// Matching is case-insensitive for ASCII characters. Calling this
    /// multiple times keeps events from any of the named participants.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Sets the start timestamp directly.
    ///
    /// Use this when you already have a parsed [`DateTime`].
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    ///
    /// Use this when you already have a parsed [`DateTime`].
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || !self.subjects.is_empty()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a participant filter is active.
    pub fn has_subject_filter(&self) -> bool {
        !self.subjects.is_empty()
    }
}

/// Parse a date string in YYYY-MM-DD format to `DateTime`<Utc> at start of day.
fn parse_date_start(date_str: &str) -> Result<DateTime<Utc>, ChatstatsError> {
    let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatsError::invalid_date(date_str))?;

    // Start of the day
    let naive_dt = naive.and_hms_opt(0, 0, 0).unwrap();
    Ok(naive_dt.and_utc())
}

/// Filters a collection of events based on the provided configuration.
///
/// Returns a new vector containing only events that match all active
/// filters. If no filters are active, returns the original events
/// unchanged. Input order is preserved.
pub fn apply_filters(events: Vec<MessageEvent>, config: &FilterConfig) -> Vec<MessageEvent> {
    if !config.is_active() {
        return events;
    }

    events
        .into_iter()
        .filter(|event| {
            if config.has_subject_filter()
                && !config
                    .subjects
                    .iter()
                    .any(|s| event.subject.eq_ignore_ascii_case(s))
            {
                return false;
            }

            if let Some(after) = config.after {
                if event.timestamp < after {
                    return false;
                }
            }

            if let Some(before) = config.before {
                if event.timestamp > before {
                    return false;
                }
            }

            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn event(day: u32, subject: &str) -> MessageEvent {
        MessageEvent::new(
            Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
            subject,
            "text",
        )
    }

    #[test]
    fn test_no_filters_pass_through() {
        let events = vec![event(1, "Alice"), event(2, "Bob")];
        let config = FilterConfig::new();
        assert!(!config.is_active());
        let filtered = apply_filters(events.clone(), &config);
        assert_eq!(filtered, events);
    }

    #[test]
    fn test_subject_filter_case_insensitive() {
        let events = vec![event(1, "Alice"), event(2, "Bob"), event(3, "ALICE")];
        let config = FilterConfig::new().with_subject("alice");
        let filtered = apply_filters(events, &config);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_multiple_subjects_or_logic() {
        let events = vec![event(1, "Alice"), event(2, "Bob"), event(3, "Carol")];
        let config = FilterConfig::new().with_subject("Alice").with_subject("Carol");
        let filtered = apply_filters(events, &config);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].subject, "Alice");
        assert_eq!(filtered[1].subject, "Carol");
    }

    #[test]
    fn test_date_range_inclusive() {
        let events = vec![event(1, "Alice"), event(15, "Alice"), event(30, "Alice")];
        let config = FilterConfig::new()
            .with_date_from("2024-06-15")
            .unwrap()
            .with_date_to("2024-06-15")
            .unwrap();
        let filtered = apply_filters(events, &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].timestamp.day(), 15);
    }

    #[test]
    fn test_combined_filters_and_logic() {
        let events = vec![event(1, "Alice"), event(15, "Bob"), event(15, "Alice")];
        let config = FilterConfig::new()
            .with_subject("Alice")
            .with_date_from("2024-06-10")
            .unwrap();
        let filtered = apply_filters(events, &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].subject, "Alice");
        assert_eq!(filtered[0].timestamp.day(), 15);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = FilterConfig::new().with_date_from("15/06/2024").unwrap_err();
        assert!(err.is_invalid_date());
        let err = FilterConfig::new().with_date_to("junk").unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_filter_preserves_order() {
        let events = vec![event(1, "Alice"), event(2, "Bob"), event(3, "Alice")];
        let config = FilterConfig::new().with_subject("Alice");
        let filtered = apply_filters(events, &config);
        assert!(filtered[0].timestamp < filtered[1].timestamp);
    }

    #[test]
    fn test_with_after_before_direct() {
        let config = FilterConfig::new()
            .with_after(Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap())
            .with_before(Utc.with_ymd_and_hms(2024, 6, 2, 23, 59, 59).unwrap());
        assert!(config.has_date_filter());
        let events = vec![event(1, "Alice"), event(2, "Alice"), event(3, "Alice")];
        let filtered = apply_filters(events, &config);
        assert_eq!(filtered.len(), 1);
    }
}
