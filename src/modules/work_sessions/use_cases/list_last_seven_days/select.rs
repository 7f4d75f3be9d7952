use chrono::NaiveDate;

use crate::modules::work_sessions::core::periods::ReportingPeriod;
use crate::modules::work_sessions::core::work_entry::WorkEntry;

/// Entries dated within the trailing week ending `today`, in log order.
pub fn entries_in_last_seven_days(entries: &[WorkEntry], today: NaiveDate) -> Vec<WorkEntry> {
    entries
        .iter()
        .filter(|entry| ReportingPeriod::TrailingWeek.contains(entry.date, today))
        .cloned()
        .collect()
}
