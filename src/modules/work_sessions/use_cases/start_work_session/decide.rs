// Pure decision for starting a work session. Never performs input or output.
//
// Starting while a session is already running is not an error: the new start replaces the old one.

use chrono::{DateTime, Utc};

use crate::modules::work_sessions::core::open_session::{OpenSession, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartDecision {
    pub session: OpenSession,
    pub replaced: Option<OpenSession>,
}

pub fn decide_start(state: &SessionState, now: DateTime<Utc>) -> StartDecision {
    let replaced = match state {
        SessionState::Idle => None,
        SessionState::Running(previous) => Some(*previous),
    };
    StartDecision {
        session: OpenSession::starting_at(now),
        replaced,
    }
}
