use chrono::{DateTime, Utc};

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Round an hour amount to two decimals, half away from zero.
///
/// Durations are never negative, so this is round-half-up for every value the engine produces.
/// The usual binary floating point caveat applies: `0.125` is stored exactly and rounds to `0.13`,
/// while a value like `1.005` is stored slightly below its literal and rounds to `1.0`.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Hours between two instants as `hours + minutes / 60 + seconds / 3600`, rounded to two decimals.
///
/// Only the time-of-day part of the interval counts: whole elapsed days are dropped, so a session
/// running 25 hours is recorded as 1 hour. The direction of the interval is ignored.
pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let seconds = (end - start).num_seconds().abs() % SECONDS_PER_DAY;
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / 60;
    let seconds = seconds % 60;
    round_hours(hours as f64 + minutes as f64 / 60.0 + seconds as f64 / 3_600.0)
}
