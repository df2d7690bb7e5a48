//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Derived-table format options
//! - [`WindowArg`] - Aggregation window options
//!
//! # Using the enums in Libraries
//!
//! These types convert into their library-first counterparts:
//!
//! ```rust
//! use chatstats::cli::{OutputFormat, WindowArg};
//! use chatstats::config::Window;
//! use chatstats::format::TableFormat;
//!
//! let format: TableFormat = OutputFormat::Json.into();
//! let window: Window = WindowArg::Daily.into();
//! assert_eq!(window, Window::Daily);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Window;
use crate::format::TableFormat;

/// Derive conversation structure and activity statistics
/// from normalized chat message logs.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats events.json
    chatstats events.csv -o report.json
    chatstats events.json --threshold 90 --window daily
    chatstats events.json --after 2024-01-01 --subject Alice --subject Bob
    chatstats events.json --table derived.csv")]
pub struct Args {
    /// Path to normalized events file (JSON array or headered CSV)
    pub input: String,

    /// Path to the aggregate report output file (JSON)
    #[arg(short, long, default_value = "chat_report.json")]
    pub output: String,

    /// Conversation gap threshold in minutes
    #[arg(short = 'g', long, default_value_t = 60.0, value_name = "MINUTES")]
    pub threshold: f64,

    /// Aggregation window for time series
    #[arg(short, long, value_enum, default_value = "weekly")]
    pub window: WindowArg,

    /// Filter events after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Filter events before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only these participants (repeat for several)
    #[arg(short, long = "subject", value_name = "NAME")]
    pub subjects: Vec<String>,

    /// Also write the derived per-message table to this path
    #[arg(long, value_name = "PATH")]
    pub table: Option<String>,

    /// Format for the derived table (detected from --table extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum number of events required to produce a report
    #[arg(long, default_value_t = 2, value_name = "COUNT")]
    pub min_events: usize,
}

/// Derived-table output format options.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    Csv,
    /// JSON column map
    Json,
}

impl From<OutputFormat> for TableFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => TableFormat::Csv,
            OutputFormat::Json => TableFormat::Json,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TableFormat::from(*self))
    }
}

/// Aggregation window options.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowArg {
    /// Calendar weeks starting Monday
    Weekly,
    /// Calendar days
    Daily,
}

impl From<WindowArg> for Window {
    fn from(window: WindowArg) -> Self {
        match window {
            WindowArg::Weekly => Window::Weekly,
            WindowArg::Daily => Window::Daily,
        }
    }
}

impl std::fmt::Display for WindowArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Window::from(*self))
    }
}
