//! Configuration types for the analysis pipeline.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, Window};
//!
//! let config = AnalysisConfig::new()
//!     .with_threshold_minutes(90.0)
//!     .with_window(Window::Daily);
//! ```

use serde::{Deserialize, Serialize};

/// Calendar window used for time-series aggregation.
///
/// Windows are non-overlapping and gap-free: every window between the first
/// and last event is present in the output even when it holds no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    /// One calendar week, starting Monday.
    #[default]
    Weekly,

    /// One calendar day.
    Daily,
}

impl Window {
    /// Returns the window width in days.
    pub fn days(&self) -> i64 {
        match self {
            Window::Weekly => 7,
            Window::Daily => 1,
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::Weekly => write!(f, "weekly"),
            Window::Daily => write!(f, "daily"),
        }
    }
}

impl std::str::FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Window::Weekly),
            "daily" | "day" | "d" => Ok(Window::Daily),
            _ => Err(format!(
                "Unknown window: '{}'. Expected one of: weekly, daily",
                s
            )),
        }
    }
}

/// Configuration for one analysis run.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_threshold_minutes(120.0);
/// assert_eq!(config.threshold_minutes, 120.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Inter-conversation gap threshold in minutes (default: 60).
    ///
    /// A gap strictly greater than this starts a new conversation.
    pub threshold_minutes: f64,

    /// Calendar window for resampled series (default: weekly).
    pub window: Window,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold_minutes: 60.0,
            window: Window::Weekly,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation gap threshold in minutes.
    #[must_use]
    pub fn with_threshold_minutes(mut self, minutes: f64) -> Self {
        self.threshold_minutes = minutes;
        self
    }

    /// Sets the aggregation window.
    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.threshold_minutes, 60.0);
        assert_eq!(config.window, Window::Weekly);
    }

    #[test]
    fn test_builder_methods() {
        let config = AnalysisConfig::new()
            .with_threshold_minutes(30.0)
            .with_window(Window::Daily);
        assert_eq!(config.threshold_minutes, 30.0);
        assert_eq!(config.window, Window::Daily);
    }

    #[test]
    fn test_window_days() {
        assert_eq!(Window::Weekly.days(), 7);
        assert_eq!(Window::Daily.days(), 1);
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!(Window::from_str("weekly").unwrap(), Window::Weekly);
        assert_eq!(Window::from_str("W").unwrap(), Window::Weekly);
        assert_eq!(Window::from_str("daily").unwrap(), Window::Daily);
        assert_eq!(Window::from_str("d").unwrap(), Window::Daily);
        assert!(Window::from_str("hourly").is_err());
    }

    #[test]
    fn test_window_display() {
        assert_eq!(Window::Weekly.to_string(), "weekly");
        assert_eq!(Window::Daily.to_string(), "daily");
    }

    #[test]
    fn test_config_serialization() {
        let config = AnalysisConfig::new().with_threshold_minutes(45.0);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("45"));
        assert!(json.contains("weekly"));
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.threshold_minutes, 45.0);
    }
}
