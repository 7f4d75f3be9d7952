use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use uuid::Uuid;

pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifies the client context that owns at most one open session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A started, not yet stopped, work session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSession {
    pub started_at: DateTime<Utc>,
}

impl OpenSession {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now.trunc_subsecs(0),
        }
    }

    pub fn formatted_start(&self) -> String {
        self.started_at.format(START_TIME_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running(OpenSession),
}

impl From<Option<OpenSession>> for SessionState {
    fn from(session: Option<OpenSession>) -> Self {
        match session {
            Some(session) => SessionState::Running(session),
            None => SessionState::Idle,
        }
    }
}
