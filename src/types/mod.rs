//! Core types shared across the crate

use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LogtallyError>;

#[derive(Debug, Error)]
pub enum LogtallyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{granularity} statistics requested before the {granularity} analysis pass was run")]
    NotAnalyzed { granularity: &'static str },
}

/// One parsed access-log record.
///
/// Field ranges are guaranteed by [`crate::parsers::LogfileReader`] for
/// records read from a file: `month` 1-12, `day` a valid day of that month,
/// `hour` 0-23, `minute` 0-59. The analyzer never retains records; each is
/// consumed once per aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Hourly access statistics (24 buckets, index = hour of day).
#[derive(Debug, Serialize)]
pub struct HourlyReport {
    pub counts: Vec<u64>,
    pub total: u64,
    pub busiest: usize,
    pub quietest: usize,
    /// Start hour of the busiest two-hour period (0-22).
    pub busiest_two_hour: usize,
}

/// Daily access statistics (28 buckets, index = day of month - 1).
#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub counts: Vec<u64>,
    pub busiest: usize,
    pub quietest: usize,
}

/// Monthly access statistics (12 buckets, index = month - 1).
#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub counts: Vec<u64>,
    pub total: u64,
    /// Truncating integer average over all 12 months.
    pub average: u64,
    pub busiest: usize,
    pub quietest: usize,
}

/// Full statistics report across all three granularities.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub hourly: HourlyReport,
    pub daily: DailyReport,
    pub monthly: MonthlyReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = LogRecord {
            year: 2024,
            month: 3,
            day: 7,
            hour: 5,
            minute: 9,
        };
        assert_eq!(record.to_string(), "2024-03-07 05:09");
    }

    #[test]
    fn test_not_analyzed_message_names_granularity() {
        let err = LogtallyError::NotAnalyzed {
            granularity: "monthly",
        };
        assert!(err.to_string().contains("monthly"));
    }
}
