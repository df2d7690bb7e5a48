//! Windowed resampling and group-by summaries.
//!
//! Everything here derives from one [`EventTable`], so the figures stay
//! mutually consistent: the sum of a per-window count series equals the
//! per-subject totals over the same range, because both walk the same
//! columns.
//!
//! # Mean policy
//!
//! Zero-filled latency rows mean "not applicable", not "zero minutes", so
//! every reply-time mean here is computed over reply rows only. Windows or
//! subjects without a single reply get 0 *after* aggregation, which keeps
//! series gap-free for plotting without biasing the means that do exist.
//!
//! # Example
//!
//! ```
//! use chatstats::config::{AnalysisConfig, Window};
//! use chatstats::core::aggregate::{build_report, winner_by};
//! use chatstats::core::table::EventTable;
//! use chatstats::MessageEvent;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let events = vec![
//!     MessageEvent::new(base, "Alice", "hello there friend"),
//!     MessageEvent::new(base + Duration::minutes(2), "Bob", "hi"),
//! ];
//! let table = EventTable::build(events, &AnalysisConfig::new())?;
//! let report = build_report(&table, Window::Weekly);
//!
//! let talker = winner_by(&report.subject_totals, |t| t.message_count as f64).unwrap();
//! assert_eq!(talker.subject, "Alice");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use serde::Serialize;

use crate::config::Window;
use crate::core::table::EventTable;

/// Start of the calendar window containing `date`.
///
/// Weekly windows start on Monday.
pub fn window_start(date: NaiveDate, window: Window) -> NaiveDate {
    match window {
        Window::Daily => date,
        Window::Weekly => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
    }
}

/// Per-subject series over gap-free calendar windows.
///
/// `values[s][w]` is the statistic for subject `s` in window `w`; subjects
/// follow registry (first-appearance) order, windows ascend from the first
/// to the last event with no gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowedSeries {
    /// Window granularity.
    pub window: Window,
    /// Ascending window start dates.
    pub starts: Vec<NaiveDate>,
    /// Subjects in registry order.
    pub subjects: Vec<String>,
    /// One row of per-window values per subject.
    pub values: Vec<Vec<f64>>,
}

impl WindowedSeries {
    fn empty(window: Window) -> Self {
        Self {
            window,
            starts: Vec::new(),
            subjects: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Sum across subjects for each window.
    pub fn window_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.starts.len()];
        for row in &self.values {
            for (total, value) in totals.iter_mut().zip(row) {
                *total += value;
            }
        }
        totals
    }
}

/// Single-valued series over gap-free calendar windows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    /// Window granularity.
    pub window: Window,
    /// Ascending window start dates.
    pub starts: Vec<NaiveDate>,
    /// One value per window.
    pub values: Vec<f64>,
}

/// The window with the highest total message count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusiestWindow {
    /// Start date of the window.
    pub start: NaiveDate,
    /// Total messages across all subjects in that window.
    pub total: u64,
}

/// Per-conversation summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationStat {
    /// Conversation id.
    pub conv_id: u64,
    /// Number of events in the conversation.
    pub size: u64,
    /// Mean event timestamp, the conversation's representative time.
    pub mean_timestamp: DateTime<Utc>,
}

/// Per-subject lifetime totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectTotals {
    /// Participant name.
    pub subject: String,
    /// Total messages sent.
    pub message_count: u64,
    /// Mean word count over the subject's messages.
    pub mean_message_length: f64,
    /// Mean reply latency in minutes over the subject's replies; 0 when the
    /// subject never replied.
    pub mean_reply_time: f64,
    /// Conversation-starting events (rows flagged `conv_change`).
    pub conversations_started: u64,
}

/// Everything the reporting layer consumes, in one bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Window granularity used for all series.
    pub window: Window,
    /// Number of conversations in the dataset.
    pub conversation_count: u64,
    /// Per-subject message counts per window.
    pub messages: WindowedSeries,
    /// Window with the highest total message count, if any events exist.
    pub busiest_window: Option<BusiestWindow>,
    /// Per-subject mean message length per window.
    pub mean_message_length: WindowedSeries,
    /// Per-subject mean reply time per window (replies only, 0-filled).
    pub mean_reply_time: WindowedSeries,
    /// Messages per hour of day, normalized by the dataset's span in days.
    pub hourly_activity: Vec<f64>,
    /// Mean conversation size per window.
    pub conversation_sizes: TimeSeries,
    /// Per-subject lifetime totals.
    pub subject_totals: Vec<SubjectTotals>,
}

// =============================================================================
// Window bucketing
// =============================================================================

/// Gap-free ascending window starts covering `first..=last`.
fn window_range(first: NaiveDate, last: NaiveDate, window: Window) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    let mut current = window_start(first, window);
    let end = window_start(last, window);
    while current <= end {
        starts.push(current);
        current += Duration::days(window.days());
    }
    starts
}

/// Index of `date`'s window within a range produced by [`window_range`].
fn window_index(date: NaiveDate, first_start: NaiveDate, window: Window) -> usize {
    let offset = (window_start(date, window) - first_start).num_days();
    (offset / window.days()) as usize
}

/// Accumulates per-(subject, window) sums and counts, then divides.
///
/// `select` yields `Some(value)` for rows that participate in the mean and
/// `None` for rows that are "not applicable". Cells that saw no applicable
/// row are filled with `fill` after aggregation.
fn resample_mean(
    table: &EventTable,
    window: Window,
    fill: f64,
    mut select: impl FnMut(usize) -> Option<f64>,
) -> WindowedSeries {
    if table.is_empty() {
        return WindowedSeries::empty(window);
    }

    let first = table.timestamp(0).date_naive();
    let last = table.timestamp(table.len() - 1).date_naive();
    let starts = window_range(first, last, window);
    let first_start = starts[0];

    let subjects = table.subjects().to_vec();
    let mut sums = vec![vec![0.0; starts.len()]; subjects.len()];
    let mut counts = vec![vec![0u64; starts.len()]; subjects.len()];

    for i in 0..table.len() {
        if let Some(value) = select(i) {
            let s = table.subject_id()[i];
            let w = window_index(table.timestamp(i).date_naive(), first_start, window);
            sums[s][w] += value;
            counts[s][w] += 1;
        }
    }

    let values = sums
        .into_iter()
        .zip(counts)
        .map(|(sum_row, count_row)| {
            sum_row
                .into_iter()
                .zip(count_row)
                .map(|(sum, count)| if count == 0 { fill } else { sum / count as f64 })
                .collect()
        })
        .collect();

    WindowedSeries {
        window,
        starts,
        subjects,
        values,
    }
}

// =============================================================================
// Fixed-window resampling
// =============================================================================

/// Per-subject message counts per window, plus the busiest window.
///
/// Windows without events hold explicit zero rows so the series plots
/// without gaps.
pub fn messages_per_window(
    table: &EventTable,
    window: Window,
) -> (WindowedSeries, Option<BusiestWindow>) {
    if table.is_empty() {
        return (WindowedSeries::empty(window), None);
    }

    let first = table.timestamp(0).date_naive();
    let last = table.timestamp(table.len() - 1).date_naive();
    let starts = window_range(first, last, window);
    let first_start = starts[0];

    let subjects = table.subjects().to_vec();
    let mut values = vec![vec![0.0; starts.len()]; subjects.len()];
    for i in 0..table.len() {
        let s = table.subject_id()[i];
        let w = window_index(table.timestamp(i).date_naive(), first_start, window);
        // sum of the subject indicator == count of the subject's rows
        values[s][w] += 1.0;
    }

    let series = WindowedSeries {
        window,
        starts,
        subjects,
        values,
    };

    // earliest window wins ties, matching winner_by
    let mut busiest: Option<BusiestWindow> = None;
    for (w, total) in series.window_totals().into_iter().enumerate() {
        if busiest.as_ref().is_none_or(|b| total > b.total as f64) {
            busiest = Some(BusiestWindow {
                start: series.starts[w],
                total: total as u64,
            });
        }
    }

    (series, busiest)
}

/// Per-subject mean message length per window, empty cells filled with 0.
pub fn mean_length_per_window(table: &EventTable, window: Window) -> WindowedSeries {
    let lengths = table.message_length();
    resample_mean(table, window, 0.0, |i| Some(f64::from(lengths[i])))
}

/// Per-subject mean reply time per window.
///
/// Only reply rows participate; windows without replies are filled with 0
/// after aggregation.
pub fn mean_reply_time_per_window(table: &EventTable, window: Window) -> WindowedSeries {
    let replies = table.is_reply();
    let latency = table.reply_time();
    resample_mean(table, window, 0.0, |i| replies[i].then(|| latency[i]))
}

/// Messages per hour of day, averaged over the dataset's span in days.
///
/// Returns 24 values; index 0 is midnight UTC. A span shorter than one day
/// counts as one day.
pub fn hour_histogram(table: &EventTable) -> Vec<f64> {
    let mut counts = vec![0.0; 24];
    if table.is_empty() {
        return counts;
    }

    for event in table.events() {
        counts[event.timestamp.hour() as usize] += 1.0;
    }

    let span = (table.timestamp(table.len() - 1).date_naive()
        - table.timestamp(0).date_naive())
    .num_days()
    .max(1) as f64;
    for count in &mut counts {
        *count /= span;
    }
    counts
}

// =============================================================================
// Group-by summarization
// =============================================================================

/// Per-conversation size and representative (mean) timestamp.
pub fn conversation_stats(table: &EventTable) -> Vec<ConversationStat> {
    let mut stats: Vec<ConversationStat> = Vec::new();
    let mut sum_millis: i64 = 0;
    let mut size: u64 = 0;

    for i in 0..table.len() {
        if i > 0 && table.conv_id()[i] != table.conv_id()[i - 1] {
            stats.push(ConversationStat {
                conv_id: table.conv_id()[i - 1],
                size,
                mean_timestamp: mean_timestamp(sum_millis, size),
            });
            sum_millis = 0;
            size = 0;
        }
        sum_millis += table.timestamp(i).timestamp_millis();
        size += 1;
    }

    if size > 0 {
        stats.push(ConversationStat {
            conv_id: table.conv_id()[table.len() - 1],
            size,
            mean_timestamp: mean_timestamp(sum_millis, size),
        });
    }

    stats
}

fn mean_timestamp(sum_millis: i64, size: u64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(sum_millis / size as i64)
        .single()
        .unwrap_or_default()
}

/// Mean conversation size per window.
///
/// Conversations are bucketed by their mean timestamp; windows without
/// conversations are filled with 0.
pub fn conversation_size_per_window(table: &EventTable, window: Window) -> TimeSeries {
    let stats = conversation_stats(table);
    if stats.is_empty() {
        return TimeSeries {
            window,
            starts: Vec::new(),
            values: Vec::new(),
        };
    }

    let first = stats[0].mean_timestamp.date_naive();
    let last = stats[stats.len() - 1].mean_timestamp.date_naive();
    let starts = window_range(first, last, window);
    let first_start = starts[0];

    let mut sums = vec![0.0; starts.len()];
    let mut counts = vec![0u64; starts.len()];
    for stat in &stats {
        let w = window_index(stat.mean_timestamp.date_naive(), first_start, window);
        sums[w] += stat.size as f64;
        counts[w] += 1;
    }

    let values = sums
        .into_iter()
        .zip(counts)
        .map(|(sum, count)| if count == 0 { 0.0 } else { sum / count as f64 })
        .collect();

    TimeSeries {
        window,
        starts,
        values,
    }
}

/// Per-subject lifetime totals.
///
/// Reply-time means are over reply rows only; subjects without replies get
/// 0. Conversation starts count `conv_change` rows, so the seed row of
/// conversation 0 is not attributed to anyone.
pub fn subject_totals(table: &EventTable) -> Vec<SubjectTotals> {
    let subject_count = table.subjects().len();
    let mut message_counts = vec![0u64; subject_count];
    let mut length_sums = vec![0.0; subject_count];
    let mut reply_sums = vec![0.0; subject_count];
    let mut reply_counts = vec![0u64; subject_count];
    let mut starts = vec![0u64; subject_count];

    for i in 0..table.len() {
        let s = table.subject_id()[i];
        message_counts[s] += 1;
        length_sums[s] += f64::from(table.message_length()[i]);
        if table.is_reply()[i] {
            reply_sums[s] += table.reply_time()[i];
            reply_counts[s] += 1;
        }
        if table.conv_change()[i] {
            starts[s] += 1;
        }
    }

    table
        .subjects()
        .iter()
        .enumerate()
        .map(|(s, subject)| SubjectTotals {
            subject: subject.clone(),
            message_count: message_counts[s],
            mean_message_length: if message_counts[s] == 0 {
                0.0
            } else {
                length_sums[s] / message_counts[s] as f64
            },
            mean_reply_time: if reply_counts[s] == 0 {
                0.0
            } else {
                reply_sums[s] / reply_counts[s] as f64
            },
            conversations_started: starts[s],
        })
        .collect()
}

// =============================================================================
// Winner selection
// =============================================================================

/// The row with the maximum key.
///
/// Ties resolve to the earliest row, which for [`subject_totals`] output is
/// the subject that appeared first in the event sequence.
pub fn winner_by<T, F>(rows: &[T], mut key: F) -> Option<&T>
where
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(&T, f64)> = None;
    for row in rows {
        let value = key(row);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((row, value)),
        }
    }
    best.map(|(row, _)| row)
}

/// Builds the complete report consumed by the presentation layer.
pub fn build_report(table: &EventTable, window: Window) -> AnalysisReport {
    let (messages, busiest_window) = messages_per_window(table, window);
    AnalysisReport {
        window,
        conversation_count: table.conversation_count(),
        messages,
        busiest_window,
        mean_message_length: mean_length_per_window(table, window),
        mean_reply_time: mean_reply_time_per_window(table, window),
        hourly_activity: hour_histogram(table),
        conversation_sizes: conversation_size_per_window(table, window),
        subject_totals: subject_totals(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::event::MessageEvent;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        // Saturday 2024-06-15; its week starts Monday 2024-06-10
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn build(rows: &[(i64, &str, &str)]) -> EventTable {
        let events = rows
            .iter()
            .map(|(m, subject, text)| {
                MessageEvent::new(base() + Duration::minutes(*m), *subject, *text)
            })
            .collect();
        EventTable::build(events, &AnalysisConfig::new()).unwrap()
    }

    #[test]
    fn test_window_start_weekly_is_monday() {
        let sat = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(window_start(sat, Window::Weekly), mon);
        assert_eq!(window_start(mon, Window::Weekly), mon);
        assert_eq!(window_start(sat, Window::Daily), sat);
    }

    #[test]
    fn test_window_range_is_gap_free() {
        let first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let starts = window_range(first, last, Window::Weekly);
        assert_eq!(starts.len(), 5);
        for pair in starts.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
    }

    #[test]
    fn test_messages_per_window_counts() {
        // one week apart: two windows
        let table = build(&[
            (0, "Alice", "a"),
            (5, "Bob", "b"),
            (7 * 24 * 60, "Alice", "c"),
        ]);
        let (series, busiest) = messages_per_window(&table, Window::Weekly);
        assert_eq!(series.starts.len(), 2);
        assert_eq!(series.subjects, vec!["Alice", "Bob"]);
        assert_eq!(series.values[0], vec![1.0, 1.0]); // Alice
        assert_eq!(series.values[1], vec![1.0, 0.0]); // Bob

        let busiest = busiest.unwrap();
        assert_eq!(busiest.total, 2);
        assert_eq!(busiest.start, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn test_count_sum_matches_subject_totals() {
        let table = build(&[
            (0, "Alice", "a"),
            (2, "Bob", "b"),
            (4, "Alice", "c"),
            (3 * 7 * 24 * 60, "Bob", "d"),
        ]);
        let (series, _) = messages_per_window(&table, Window::Weekly);
        let totals = subject_totals(&table);
        for (s, subject_totals_row) in totals.iter().enumerate() {
            let windowed_sum: f64 = series.values[s].iter().sum();
            assert_eq!(windowed_sum as u64, subject_totals_row.message_count);
        }
    }

    #[test]
    fn test_empty_windows_are_zero_rows() {
        // three weeks apart leaves one silent week in the middle
        let table = build(&[(0, "Alice", "a"), (2 * 7 * 24 * 60, "Alice", "b")]);
        let (series, _) = messages_per_window(&table, Window::Weekly);
        assert_eq!(series.starts.len(), 3);
        assert_eq!(series.values[0], vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_mean_length_per_window() {
        let table = build(&[
            (0, "Alice", "one"),
            (1, "Alice", "two words here"),
            (2, "Bob", "a b c d"),
        ]);
        let series = mean_length_per_window(&table, Window::Weekly);
        assert_eq!(series.values[0], vec![2.0]); // Alice: (1+3)/2
        assert_eq!(series.values[1], vec![4.0]); // Bob
    }

    #[test]
    fn test_mean_reply_time_excludes_non_replies() {
        // Bob replies 5 minutes after Alice; Alice's opener is not a reply
        let table = build(&[(0, "Alice", "a"), (5, "Bob", "b"), (6, "Bob", "c")]);
        let series = mean_reply_time_per_window(&table, Window::Weekly);
        // Alice never replied: filled with 0 after aggregation
        assert_eq!(series.values[0], vec![0.0]);
        // Bob's only reply took 5 minutes; his non-reply row is excluded
        assert_eq!(series.values[1], vec![5.0]);
    }

    #[test]
    fn test_hour_histogram() {
        let table = build(&[(0, "Alice", "a"), (1, "Bob", "b"), (60, "Alice", "c")]);
        let histogram = hour_histogram(&table);
        assert_eq!(histogram.len(), 24);
        // all events on one day: span clamps to 1
        assert_eq!(histogram[12], 2.0);
        assert_eq!(histogram[13], 1.0);
        assert_eq!(histogram[0], 0.0);
    }

    #[test]
    fn test_hour_histogram_empty() {
        let table = EventTable::build(vec![], &AnalysisConfig::new()).unwrap();
        let histogram = hour_histogram(&table);
        assert_eq!(histogram, vec![0.0; 24]);
    }

    #[test]
    fn test_conversation_stats() {
        let table = build(&[
            (0, "Alice", "a"),
            (10, "Bob", "b"),
            (120, "Alice", "c"),
        ]);
        let stats = conversation_stats(&table);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].conv_id, 0);
        assert_eq!(stats[0].size, 2);
        assert_eq!(stats[0].mean_timestamp, base() + Duration::minutes(5));
        assert_eq!(stats[1].conv_id, 1);
        assert_eq!(stats[1].size, 1);
        assert_eq!(stats[1].mean_timestamp, base() + Duration::minutes(120));
    }

    #[test]
    fn test_conversation_stats_sizes_sum_to_len() {
        let table = build(&[
            (0, "Alice", "a"),
            (10, "Bob", "b"),
            (120, "Alice", "c"),
            (500, "Bob", "d"),
            (501, "Alice", "e"),
        ]);
        let stats = conversation_stats(&table);
        let total: u64 = stats.iter().map(|s| s.size).sum();
        assert_eq!(total as usize, table.len());
    }

    #[test]
    fn test_conversation_size_per_window() {
        let table = build(&[
            (0, "Alice", "a"),
            (10, "Bob", "b"),
            (120, "Alice", "c"),
        ]);
        let series = conversation_size_per_window(&table, Window::Weekly);
        // both conversations fall in the same week: mean of sizes 2 and 1
        assert_eq!(series.starts.len(), 1);
        assert_eq!(series.values, vec![1.5]);
    }

    #[test]
    fn test_subject_totals() {
        let table = build(&[
            (0, "Alice", "one two three"),
            (5, "Bob", "short"),
            (10, "Alice", "hi"),
            (200, "Bob", "new conversation starter"),
        ]);
        let totals = subject_totals(&table);
        assert_eq!(totals.len(), 2);

        let alice = &totals[0];
        assert_eq!(alice.subject, "Alice");
        assert_eq!(alice.message_count, 2);
        assert_eq!(alice.mean_message_length, 2.0); // (3 + 1) / 2
        assert_eq!(alice.mean_reply_time, 5.0); // one reply, 5 minutes
        assert_eq!(alice.conversations_started, 0);

        let bob = &totals[1];
        assert_eq!(bob.message_count, 2);
        assert_eq!(bob.mean_reply_time, 5.0); // reply at t=5; t=200 starts a convo
        assert_eq!(bob.conversations_started, 1);
    }

    #[test]
    fn test_winner_by_max() {
        let totals = vec![
            SubjectTotals {
                subject: "Alice".into(),
                message_count: 3,
                mean_message_length: 2.0,
                mean_reply_time: 1.0,
                conversations_started: 0,
            },
            SubjectTotals {
                subject: "Bob".into(),
                message_count: 5,
                mean_message_length: 1.0,
                mean_reply_time: 9.0,
                conversations_started: 2,
            },
        ];
        let talker = winner_by(&totals, |t| t.message_count as f64).unwrap();
        assert_eq!(talker.subject, "Bob");
        let wordy = winner_by(&totals, |t| t.mean_message_length).unwrap();
        assert_eq!(wordy.subject, "Alice");
    }

    #[test]
    fn test_winner_tie_breaks_to_first() {
        let totals = vec![
            SubjectTotals {
                subject: "Alice".into(),
                message_count: 5,
                mean_message_length: 0.0,
                mean_reply_time: 0.0,
                conversations_started: 0,
            },
            SubjectTotals {
                subject: "Bob".into(),
                message_count: 5,
                mean_message_length: 0.0,
                mean_reply_time: 0.0,
                conversations_started: 0,
            },
        ];
        let winner = winner_by(&totals, |t| t.message_count as f64).unwrap();
        assert_eq!(winner.subject, "Alice");
    }

    #[test]
    fn test_winner_empty() {
        let totals: Vec<SubjectTotals> = Vec::new();
        assert!(winner_by(&totals, |t| t.message_count as f64).is_none());
    }

    #[test]
    fn test_report_empty_dataset() {
        let table = EventTable::build(vec![], &AnalysisConfig::new()).unwrap();
        let report = build_report(&table, Window::Weekly);
        assert_eq!(report.conversation_count, 0);
        assert!(report.messages.starts.is_empty());
        assert!(report.busiest_window.is_none());
        assert!(report.subject_totals.is_empty());
        assert!(report.conversation_sizes.starts.is_empty());
    }

    #[test]
    fn test_report_single_event() {
        let table = build(&[(0, "Alice", "only message")]);
        let report = build_report(&table, Window::Weekly);
        assert_eq!(report.conversation_count, 1);
        assert_eq!(report.subject_totals.len(), 1);
        assert_eq!(report.subject_totals[0].message_count, 1);
        assert_eq!(report.subject_totals[0].mean_message_length, 2.0);
        assert_eq!(report.busiest_window.unwrap().total, 1);
    }

    #[test]
    fn test_report_daily_window() {
        let table = build(&[(0, "Alice", "a"), (24 * 60, "Bob", "b")]);
        let report = build_report(&table, Window::Daily);
        assert_eq!(report.messages.starts.len(), 2);
        assert_eq!(report.messages.values[0], vec![1.0, 0.0]);
        assert_eq!(report.messages.values[1], vec![0.0, 1.0]);
    }
}
