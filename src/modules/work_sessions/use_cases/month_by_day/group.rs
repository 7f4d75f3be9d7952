use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::modules::work_sessions::core::periods::ReportingPeriod;
use crate::modules::work_sessions::core::work_entry::WorkEntry;

/// Total hours per day of the month containing `today`.
///
/// Days without entries are absent from the map. Totals are plain sums and are not rounded.
pub fn group_by_day_of_month(entries: &[WorkEntry], today: NaiveDate) -> BTreeMap<u32, f64> {
    entries
        .iter()
        .filter(|entry| ReportingPeriod::CurrentMonth.contains(entry.date, today))
        .fold(BTreeMap::new(), |mut days, entry| {
            *days.entry(entry.date.day()).or_insert(0.0) += entry.duration_hours;
            days
        })
}
