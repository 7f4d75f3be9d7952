use chrono::NaiveDate;
use rstest::fixture;

use crate::modules::work_sessions::core::work_entry::{DATE_FORMAT, WorkEntry};

pub fn make_work_entry(
    date: &str,
    start_time: &str,
    end_time: &str,
    duration_hours: f64,
) -> WorkEntry {
    WorkEntry {
        date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        duration_hours,
    }
}

#[fixture]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// A log seen from 2024-06-10, in append order (the 06-08 entry was appended late).
#[fixture]
pub fn sample_entries() -> Vec<WorkEntry> {
    vec![
        make_work_entry("2024-06-01", "09:00:00", "15:00:00", 6.0),
        make_work_entry("2024-06-04", "09:00:00", "13:00:00", 4.0),
        make_work_entry("2024-06-10", "09:00:00", "11:00:00", 2.0),
        make_work_entry("2024-06-08", "10:00:00", "13:00:00", 3.0),
        make_work_entry("2024-03-15", "09:00:00", "10:00:00", 1.0),
        make_work_entry("2023-06-10", "09:00:00", "12:00:00", 3.0),
    ]
}

pub fn sample_lines() -> Vec<String> {
    sample_entries().iter().map(WorkEntry::to_line).collect()
}
