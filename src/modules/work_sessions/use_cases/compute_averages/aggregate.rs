// Average session duration per reporting period.
//
// Periods overlap: one entry can count towards today, the trailing week, the month and the year
// at the same time. Each average is rounded once, on the final value.

use async_graphql::SimpleObject;
use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::work_sessions::core::duration::round_hours;
use crate::modules::work_sessions::core::periods::ReportingPeriod;
use crate::modules::work_sessions::core::work_entry::WorkEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, SimpleObject)]
pub struct PeriodAverages {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    total_hours: f64,
    count: usize,
}

impl Bucket {
    fn add(&mut self, hours: f64) {
        self.total_hours += hours;
        self.count += 1;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        round_hours(self.total_hours / self.count as f64)
    }
}

pub fn compute_averages(entries: &[WorkEntry], today: NaiveDate) -> PeriodAverages {
    let mut buckets = ReportingPeriod::ALL.map(|_| Bucket::default());
    for entry in entries {
        for (bucket, period) in buckets.iter_mut().zip(ReportingPeriod::ALL) {
            if period.contains(entry.date, today) {
                bucket.add(entry.duration_hours);
            }
        }
    }

    let [daily, weekly, monthly, yearly] = buckets.map(|bucket| bucket.average());
    PeriodAverages {
        daily,
        weekly,
        monthly,
        yearly,
    }
}
