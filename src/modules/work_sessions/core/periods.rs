// Reporting windows over calendar dates.
//
// All windows compare calendar dates only; the time of day of an entry plays no part once it is
// logged. Every read-side operation goes through `ReportingPeriod::contains`, so the weekly average
// and the 7-day listing (and the monthly average and the month grouping) select the same entries.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

/// Days before today that still belong to the trailing week (today plus six previous days).
const TRAILING_WEEK_LOOKBACK_DAYS: u64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingPeriod {
    Today,
    TrailingWeek,
    CurrentMonth,
    CurrentYear,
}

impl ReportingPeriod {
    pub const ALL: [ReportingPeriod; 4] = [
        ReportingPeriod::Today,
        ReportingPeriod::TrailingWeek,
        ReportingPeriod::CurrentMonth,
        ReportingPeriod::CurrentYear,
    ];

    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ReportingPeriod::Today => date == today,
            ReportingPeriod::TrailingWeek => trailing_week_start(today) <= date && date <= today,
            ReportingPeriod::CurrentMonth => {
                date.year() == today.year() && date.month() == today.month()
            }
            ReportingPeriod::CurrentYear => date.year() == today.year(),
        }
    }
}

/// Calendar date of `now` in the reference timezone.
pub fn reference_date(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

fn trailing_week_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(TRAILING_WEEK_LOOKBACK_DAYS))
        .unwrap_or(NaiveDate::MIN)
}
