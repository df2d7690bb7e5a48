//! Property-based tests for chatstats.
//!
//! These tests generate random sorted event sequences to check the
//! structural laws of the derived columns.

use proptest::prelude::*;

use chatstats::config::AnalysisConfig;
use chatstats::core::aggregate::subject_totals;
use chatstats::core::table::EventTable;
use chatstats::MessageEvent;
use chrono::{Duration, TimeZone, Utc};

/// Generate a sorted event sequence from random minute gaps and senders.
fn arb_events(max_len: usize) -> impl Strategy<Value = Vec<MessageEvent>> {
    prop::collection::vec(
        (
            // gap to the previous event, minutes
            0i64..200,
            // Fast: select from predefined senders
            prop::sample::select(vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Charlie".to_string(),
                "Иван".to_string(),
            ]),
            // Fast: select from predefined contents
            prop::sample::select(vec![
                "Hello".to_string(),
                "Hi there!".to_string(),
                "How are you?".to_string(),
                String::new(),
                "🎉🔥💀 emoji".to_string(),
            ]),
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        let mut timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        rows.into_iter()
            .map(|(gap, sender, text)| {
                timestamp += Duration::minutes(gap);
                MessageEvent::new(timestamp, sender, text)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // COLUMN LAWS
    // ============================================

    /// Every derived column has the input length
    #[test]
    fn columns_match_input_length(events in arb_events(30)) {
        let n = events.len();
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        prop_assert_eq!(table.len(), n);
        prop_assert_eq!(table.conv_id().len(), n);
        prop_assert_eq!(table.conv_change().len(), n);
        prop_assert_eq!(table.sender_changed().len(), n);
        prop_assert_eq!(table.is_reply().len(), n);
        prop_assert_eq!(table.reply_time().len(), n);
        prop_assert_eq!(table.inter_conv_time().len(), n);
        for (_, column) in table.columns() {
            prop_assert_eq!(column.len(), n);
        }
    }

    /// Index 0 never carries a change or reply flag
    #[test]
    fn first_event_is_never_flagged(events in arb_events(30)) {
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        if !table.is_empty() {
            prop_assert!(!table.conv_change()[0]);
            prop_assert!(!table.is_reply()[0]);
            prop_assert!(!table.sender_changed()[0]);
        }
    }

    /// conv_id is non-decreasing and increments exactly at change flags
    #[test]
    fn conv_id_tracks_changes(events in arb_events(30)) {
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        for i in 1..table.len() {
            let delta = table.conv_id()[i] - table.conv_id()[i - 1];
            prop_assert_eq!(delta, u64::from(table.conv_change()[i]));
        }
    }

    /// A reply never coincides with a conversation change
    #[test]
    fn replies_exclude_conversation_starts(events in arb_events(30)) {
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        for i in 0..table.len() {
            if table.is_reply()[i] {
                prop_assert!(!table.conv_change()[i]);
                prop_assert!(table.sender_changed()[i]);
            }
        }
    }

    /// Latency columns are zero exactly where their flag is false
    #[test]
    fn latency_zero_fill_alignment(events in arb_events(30)) {
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        for i in 0..table.len() {
            if table.is_reply()[i] {
                let gap = (table.timestamp(i) - table.timestamp(i - 1)).num_minutes() as f64;
                prop_assert_eq!(table.reply_time()[i], gap);
            } else {
                prop_assert_eq!(table.reply_time()[i], 0.0);
            }
            if table.conv_change()[i] {
                prop_assert!(table.inter_conv_time()[i] > 0.0);
            } else {
                prop_assert_eq!(table.inter_conv_time()[i], 0.0);
            }
        }
    }

    /// Re-running the pipeline on the same input is bit-identical
    #[test]
    fn pipeline_is_pure(events in arb_events(20)) {
        let config = AnalysisConfig::new();
        let first = EventTable::build(events.clone(), &config).unwrap();
        let second = EventTable::build(events, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    // ============================================
    // AGGREGATION LAWS
    // ============================================

    /// Per-subject message counts sum to the event count
    #[test]
    fn subject_counts_partition_events(events in arb_events(30)) {
        let n = events.len();
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        let totals = subject_totals(&table);
        let sum: u64 = totals.iter().map(|t| t.message_count).sum();
        prop_assert_eq!(sum as usize, n);
    }

    /// Conversation starts sum to conversation_count - 1 on non-empty input
    #[test]
    fn starts_match_conversation_count(events in arb_events(30)) {
        let table = EventTable::build(events, &AnalysisConfig::new()).unwrap();
        let totals = subject_totals(&table);
        let starts: u64 = totals.iter().map(|t| t.conversations_started).sum();
        if table.is_empty() {
            prop_assert_eq!(starts, 0);
        } else {
            prop_assert_eq!(starts, table.conversation_count() - 1);
        }
    }

    /// Unsorted input is always rejected
    #[test]
    fn unsorted_input_rejected(events in arb_events(10), swap in 1usize..9) {
        if events.len() > swap {
            let mut shuffled = events;
            // force a backwards step unless all timestamps are equal
            let earlier = shuffled[swap - 1].timestamp - Duration::minutes(1);
            shuffled[swap].timestamp = earlier;
            let result = EventTable::build(shuffled, &AnalysisConfig::new());
            prop_assert!(result.is_err());
        }
    }
}
