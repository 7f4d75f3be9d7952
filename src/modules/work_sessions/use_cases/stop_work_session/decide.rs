// Pure decision for stopping a work session.
//
// - Idle: nothing to stop.
// - Running: turn the open session into a completed work entry dated on the stop day.

use chrono::{DateTime, SubsecRound, Utc};

use crate::modules::work_sessions::core::duration::elapsed_hours;
use crate::modules::work_sessions::core::open_session::SessionState;
use crate::modules::work_sessions::core::work_entry::{TIME_FORMAT, WorkEntry};
use crate::modules::work_sessions::use_cases::stop_work_session::decision::StopDecision;

pub fn decide_stop(state: &SessionState, now: DateTime<Utc>) -> StopDecision {
    match state {
        SessionState::Idle => StopDecision::NothingToStop,
        SessionState::Running(session) => {
            let ended_at = now.trunc_subsecs(0);
            StopDecision::Completed {
                entry: WorkEntry {
                    date: ended_at.date_naive(),
                    start_time: session.started_at.format(TIME_FORMAT).to_string(),
                    end_time: ended_at.format(TIME_FORMAT).to_string(),
                    duration_hours: elapsed_hours(session.started_at, ended_at),
                },
            }
        }
    }
}
