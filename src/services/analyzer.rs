//! Access-frequency aggregation
//!
//! [`LogAnalyzer`] owns three fixed-size frequency tables (24 hourly, 28
//! daily, 12 monthly buckets) and fills each with one full pass over its
//! record source. All derived statistics are read-only queries over the
//! populated tables.

use crate::parsers::{LogfileReader, RecordSource, DEFAULT_LOG_FILE};
use crate::types::{
    DailyReport, HourlyReport, LogtallyError, MonthlyReport, Result, StatsReport,
};

/// Aggregates log records into hourly, daily, and monthly frequency tables.
///
/// Tables start at zero and are populated lazily by the `analyze_*` passes.
/// Each pass rewinds the source and consumes it in full; running a pass twice
/// double-counts, there is no implicit table reset. Queries return
/// [`LogtallyError::NotAnalyzed`] until the matching pass has run.
pub struct LogAnalyzer<S: RecordSource> {
    source: S,
    hour_counts: [u64; 24],
    day_counts: [u64; 28],
    month_counts: [u64; 12],
    hourly_done: bool,
    daily_done: bool,
    monthly_done: bool,
}

impl LogAnalyzer<LogfileReader> {
    /// Analyzer over the default log file (`demo.log`).
    pub fn from_default_log() -> Result<Self> {
        Self::from_path(DEFAULT_LOG_FILE)
    }

    /// Analyzer over a specific log file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(LogfileReader::new(path)?))
    }
}

impl<S: RecordSource> LogAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            hour_counts: [0; 24],
            day_counts: [0; 28],
            month_counts: [0; 12],
            hourly_done: false,
            daily_done: false,
            monthly_done: false,
        }
    }

    /// Fill the hourly table with one full pass over the source.
    pub fn analyze_hourly(&mut self) {
        self.source.reset();
        while let Some(record) = self.source.next_record() {
            if let Some(count) = self.hour_counts.get_mut(record.hour as usize) {
                *count += 1;
            }
        }
        self.hourly_done = true;
    }

    /// Fill the daily table with one full pass over the source.
    ///
    /// Days outside 1..=28 are skipped silently so one malformed record
    /// cannot abort the batch.
    pub fn analyze_daily(&mut self) {
        self.source.reset();
        while let Some(record) = self.source.next_record() {
            let slot = (record.day as usize)
                .checked_sub(1)
                .and_then(|day| self.day_counts.get_mut(day));
            if let Some(count) = slot {
                *count += 1;
            }
        }
        self.daily_done = true;
    }

    /// Fill the monthly table with one full pass over the source.
    ///
    /// Months outside 1..=12 are skipped silently.
    pub fn analyze_monthly(&mut self) {
        self.source.reset();
        while let Some(record) = self.source.next_record() {
            let slot = (record.month as usize)
                .checked_sub(1)
                .and_then(|month| self.month_counts.get_mut(month));
            if let Some(count) = slot {
                *count += 1;
            }
        }
        self.monthly_done = true;
    }

    /// Total number of accesses, summed over the hourly table.
    pub fn number_of_accesses(&self) -> Result<u64> {
        self.require(self.hourly_done, "hourly")?;
        Ok(self.hour_counts.iter().sum())
    }

    /// Hour with the most accesses; first such hour on a tie.
    pub fn busiest_hour(&self) -> Result<usize> {
        self.require(self.hourly_done, "hourly")?;
        Ok(max_index(&self.hour_counts))
    }

    /// Hour with the fewest accesses; first such hour on a tie.
    pub fn quietest_hour(&self) -> Result<usize> {
        self.require(self.hourly_done, "hourly")?;
        Ok(min_index(&self.hour_counts))
    }

    /// Start hour of the busiest two-hour period (0-22); earliest on a tie.
    pub fn busiest_two_hour(&self) -> Result<usize> {
        self.require(self.hourly_done, "hourly")?;

        let mut champion = 0;
        let mut best = 0;
        for start in 0..self.hour_counts.len() - 1 {
            let period = self.hour_counts[start] + self.hour_counts[start + 1];
            if period > best {
                champion = start;
                best = period;
            }
        }
        Ok(champion)
    }

    /// Day index (day of month - 1) with the most accesses.
    pub fn busiest_day(&self) -> Result<usize> {
        self.require(self.daily_done, "daily")?;
        Ok(max_index(&self.day_counts))
    }

    /// Day index (day of month - 1) with the fewest accesses.
    pub fn quietest_day(&self) -> Result<usize> {
        self.require(self.daily_done, "daily")?;
        Ok(min_index(&self.day_counts))
    }

    /// Month index (month - 1) with the most accesses.
    pub fn busiest_month(&self) -> Result<usize> {
        self.require(self.monthly_done, "monthly")?;
        Ok(max_index(&self.month_counts))
    }

    /// Month index (month - 1) with the fewest accesses.
    pub fn quietest_month(&self) -> Result<usize> {
        self.require(self.monthly_done, "monthly")?;
        Ok(min_index(&self.month_counts))
    }

    /// Total accesses summed over the monthly table.
    pub fn total_accesses_per_month(&self) -> Result<u64> {
        self.require(self.monthly_done, "monthly")?;
        Ok(self.month_counts.iter().sum())
    }

    /// Truncating integer average of accesses across all 12 months.
    pub fn average_accesses_per_month(&self) -> Result<u64> {
        Ok(self.total_accesses_per_month()? / self.month_counts.len() as u64)
    }

    pub fn hour_counts(&self) -> &[u64; 24] {
        &self.hour_counts
    }

    pub fn day_counts(&self) -> &[u64; 28] {
        &self.day_counts
    }

    pub fn month_counts(&self) -> &[u64; 12] {
        &self.month_counts
    }

    /// Hourly statistics for the presentation layer.
    pub fn hourly_report(&self) -> Result<HourlyReport> {
        Ok(HourlyReport {
            counts: self.hour_counts.to_vec(),
            total: self.number_of_accesses()?,
            busiest: self.busiest_hour()?,
            quietest: self.quietest_hour()?,
            busiest_two_hour: self.busiest_two_hour()?,
        })
    }

    /// Daily statistics for the presentation layer.
    pub fn daily_report(&self) -> Result<DailyReport> {
        Ok(DailyReport {
            counts: self.day_counts.to_vec(),
            busiest: self.busiest_day()?,
            quietest: self.quietest_day()?,
        })
    }

    /// Monthly statistics for the presentation layer.
    pub fn monthly_report(&self) -> Result<MonthlyReport> {
        Ok(MonthlyReport {
            counts: self.month_counts.to_vec(),
            total: self.total_accesses_per_month()?,
            average: self.average_accesses_per_month()?,
            busiest: self.busiest_month()?,
            quietest: self.quietest_month()?,
        })
    }

    /// Combined report over all three granularities.
    pub fn stats_report(&self) -> Result<StatsReport> {
        Ok(StatsReport {
            hourly: self.hourly_report()?,
            daily: self.daily_report()?,
            monthly: self.monthly_report()?,
        })
    }

    fn require(&self, done: bool, granularity: &'static str) -> Result<()> {
        if done {
            Ok(())
        } else {
            Err(LogtallyError::NotAnalyzed { granularity })
        }
    }
}

/// Index of the greatest count; ties go to the first occurrence.
fn max_index(counts: &[u64]) -> usize {
    let mut champion = 0;
    for (index, &count) in counts.iter().enumerate().skip(1) {
        if count > counts[champion] {
            champion = index;
        }
    }
    champion
}

/// Index of the least count; ties go to the first occurrence.
fn min_index(counts: &[u64]) -> usize {
    let mut champion = 0;
    for (index, &count) in counts.iter().enumerate().skip(1) {
        if count < counts[champion] {
            champion = index;
        }
    }
    champion
}
