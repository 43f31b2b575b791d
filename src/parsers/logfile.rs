//! Plain-text access log reader
//!
//! Parses the five-integer line format `year month day hour minute`, one
//! access per line. Lines that fail to parse or carry an impossible
//! timestamp are skipped rather than aborting the whole file.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use super::RecordSource;
use crate::types::{LogRecord, Result};

/// File-backed record source.
///
/// The file is read and parsed once at construction; `reset` simply rewinds
/// the in-memory cursor, so repeated passes never touch the filesystem again.
pub struct LogfileReader {
    records: Vec<LogRecord>,
    cursor: usize,
}

impl LogfileReader {
    /// Read and parse the log file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let records = content.lines().filter_map(parse_line).collect();
        Ok(Self { records, cursor: 0 })
    }

    /// Number of well-formed records in the file.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for LogfileReader {
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

/// Parse a single log line into a record.
///
/// Requires exactly five whitespace-separated integers forming a real
/// calendar date and a valid time of day; anything else yields `None`.
fn parse_line(line: &str) -> Option<LogRecord> {
    let mut fields = line.split_whitespace();
    let year: i32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let day: u32 = fields.next()?.parse().ok()?;
    let hour: u32 = fields.next()?.parse().ok()?;
    let minute: u32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some(LogRecord {
        year,
        month,
        day,
        hour,
        minute,
    })
}
