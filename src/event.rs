//! Normalized message event type.
//!
//! This module provides [`MessageEvent`], the input record of the analysis
//! pipeline. An upstream normalizer (outside this crate) is expected to turn
//! raw chat exports into a sequence of events sorted ascending by timestamp;
//! everything in [`crate::core`] operates on that sequence.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use chatstats::MessageEvent;
//! use chrono::{TimeZone, Utc};
//!
//! let event = MessageEvent::new(
//!     Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
//!     "Alice",
//!     "Hello, world!",
//! );
//! assert_eq!(event.subject(), "Alice");
//! assert_eq!(event.word_count(), 2);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstats::MessageEvent;
//! use chrono::{TimeZone, Utc};
//!
//! let event = MessageEvent::new(
//!     Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
//!     "Alice",
//!     "Hello!",
//! );
//! let json = serde_json::to_string(&event)?;
//! let parsed: MessageEvent = serde_json::from_str(&json)?;
//!
//! assert_eq!(event, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped chat message, normalized and ready for analysis.
///
/// Events are immutable once created. The pipeline owns its event sequence
/// for the duration of one analysis run; nothing outlives the call that
/// produced it.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | When the message was sent |
/// | `subject` | `String` | Participant who sent the message |
/// | `text` | `String` | Text content of the message |
///
/// # Ordering precondition
///
/// The analysis pipeline requires events sorted non-decreasing by
/// `timestamp`. The constructor does not enforce this (a single event has
/// no ordering); [`crate::core::segment`] rejects unsorted sequences with
/// [`ChatstatsError::InvalidOrdering`](crate::ChatstatsError::InvalidOrdering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name or username of the message author.
    pub subject: String,

    /// Text content of the message.
    ///
    /// May contain newlines for multiline messages. Attachments are
    /// typically represented by the normalizer as text placeholders like
    /// `<Media omitted>`.
    pub text: String,
}

impl MessageEvent {
    /// Creates a new event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::MessageEvent;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    /// let event = MessageEvent::new(ts, "Alice", "Hello!");
    /// assert_eq!(event.timestamp(), ts);
    /// ```
    pub fn new(
        timestamp: DateTime<Utc>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            subject: subject.into(),
            text: text.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the participant name.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns the number of whitespace-separated words in the text.
    ///
    /// This is the `message_length` statistic used throughout the
    /// aggregation layer. An empty or whitespace-only text counts as 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::MessageEvent;
    /// use chrono::Utc;
    ///
    /// let event = MessageEvent::new(Utc::now(), "Alice", "three word message");
    /// assert_eq!(event.word_count(), 3);
    /// ```
    pub fn word_count(&self) -> u32 {
        self.text.split_whitespace().count() as u32
    }

    /// Returns `true` if this event's text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_event_new() {
        let event = MessageEvent::new(ts(0), "Alice", "Hello");
        assert_eq!(event.subject(), "Alice");
        assert_eq!(event.text(), "Hello");
        assert_eq!(event.timestamp(), ts(0));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(MessageEvent::new(ts(0), "Alice", "Hello").word_count(), 1);
        assert_eq!(
            MessageEvent::new(ts(0), "Alice", "one two three").word_count(),
            3
        );
        assert_eq!(
            MessageEvent::new(ts(0), "Alice", "  spaced   out  ").word_count(),
            2
        );
        assert_eq!(MessageEvent::new(ts(0), "Alice", "").word_count(), 0);
        assert_eq!(MessageEvent::new(ts(0), "Alice", "   ").word_count(), 0);
    }

    #[test]
    fn test_word_count_unicode() {
        let event = MessageEvent::new(ts(0), "Иван", "Привет мир 🌍");
        assert_eq!(event.word_count(), 3);
    }

    #[test]
    fn test_is_empty() {
        assert!(MessageEvent::new(ts(0), "Alice", "").is_empty());
        assert!(MessageEvent::new(ts(0), "Alice", "   ").is_empty());
        assert!(!MessageEvent::new(ts(0), "Alice", "Hello").is_empty());
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = MessageEvent::new(ts(30), "Alice", "Hello!");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Alice"));
        let parsed: MessageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"timestamp":"2024-06-15T12:00:00Z","subject":"Bob","text":"Hi"}"#;
        let event: MessageEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.subject(), "Bob");
        assert_eq!(event.text(), "Hi");
        assert_eq!(event.timestamp(), ts(0));
    }
}
