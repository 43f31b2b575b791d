//! Log record sources
//!
//! A record source yields parsed [`LogRecord`]s and can be rewound, because
//! the analyzer runs one independent full pass per granularity over the same
//! source.

pub mod logfile;

pub use logfile::LogfileReader;

use crate::types::LogRecord;

/// Log file analyzed when no path is given on the command line.
pub const DEFAULT_LOG_FILE: &str = "demo.log";

/// A restartable sequence of parsed log records.
///
/// `next_record` returning `None` marks exhaustion; `reset` rewinds to the
/// first record and may be called any number of times.
pub trait RecordSource {
    /// Rewind to the first record. Idempotent; always succeeds.
    fn reset(&mut self);

    /// Return the next record and advance, or `None` once exhausted.
    fn next_record(&mut self) -> Option<LogRecord>;
}

/// In-memory source backed by a vector of records.
///
/// Used by unit tests and benchmarks to drive the analyzer without a file.
pub struct MemorySource {
    records: Vec<LogRecord>,
    cursor: usize,
}

impl MemorySource {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records, cursor: 0 }
    }
}

impl RecordSource for MemorySource {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn next_record(&mut self) -> Option<LogRecord> {
        let record = self.records.get(self.cursor).copied();
        if record.is_some() {
            self.cursor += 1;
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hour: u32) -> LogRecord {
        LogRecord {
            year: 2024,
            month: 1,
            day: 1,
            hour,
            minute: 0,
        }
    }

    #[test]
    fn test_memory_source_yields_in_order() {
        let mut source = MemorySource::new(vec![record(3), record(7)]);
        assert_eq!(source.next_record().map(|r| r.hour), Some(3));
        assert_eq!(source.next_record().map(|r| r.hour), Some(7));
        assert_eq!(source.next_record(), None);
    }

    #[test]
    fn test_memory_source_reset_rewinds() {
        let mut source = MemorySource::new(vec![record(3)]);
        assert!(source.next_record().is_some());
        assert!(source.next_record().is_none());

        source.reset();
        assert_eq!(source.next_record().map(|r| r.hour), Some(3));
    }

    #[test]
    fn test_memory_source_exhausted_stays_exhausted() {
        let mut source = MemorySource::new(Vec::new());
        assert!(source.next_record().is_none());
        assert!(source.next_record().is_none());
    }
}
