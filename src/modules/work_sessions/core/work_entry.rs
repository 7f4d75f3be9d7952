// One completed work session as persisted in the entry log.
//
// Line format: `YYYY-MM-DD|HH:MM:SS|HH:MM:SS|D.DD`
// (end date, start time, end time, duration in hours).
//
// Parsing is tolerant: a line with the wrong field count or an unreadable date is rejected as a
// whole, while an unreadable duration only degrades to zero. Times of day take no part in any
// report, so they are kept verbatim.

use chrono::NaiveDate;
use thiserror::Error;

pub const FIELD_DELIMITER: char = '|';
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkEntry {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl WorkEntry {
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [date, start_time, end_time, duration] = fields.as_slice() else {
            return Err(RecordError::FieldCount(fields.len()));
        };

        Ok(Self {
            date: NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
                .map_err(|_| RecordError::InvalidDate(date.to_string()))?,
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
            duration_hours: parse_duration(duration),
        })
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{:.2}",
            self.date.format(DATE_FORMAT),
            self.start_time,
            self.end_time,
            self.duration_hours,
        )
    }
}

/// Parse a whole log, one record per line, keeping the order of the source.
///
/// Blank and malformed lines are skipped.
pub fn parse_entries(contents: &str) -> Vec<WorkEntry> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match WorkEntry::from_line(line) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, line, "skipping malformed work entry record");
                None
            }
        })
        .collect()
}

fn parse_duration(field: &str) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .unwrap_or(0.0)
}
