use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::work_sessions::core::open_session::{SessionKey, SessionState};
use crate::modules::work_sessions::core::ports::{EntryLog, OpenSessionStore};
use crate::modules::work_sessions::use_cases::errors::ApplicationError;
use crate::modules::work_sessions::use_cases::stop_work_session::decide::decide_stop;
use crate::modules::work_sessions::use_cases::stop_work_session::decision::StopDecision;

pub struct StopWorkSessionHandler<TSessions, TEntryLog>
where
    TSessions: OpenSessionStore + ?Sized,
    TEntryLog: EntryLog + ?Sized,
{
    sessions: Arc<TSessions>,
    entry_log: Arc<TEntryLog>,
}

impl<TSessions, TEntryLog> StopWorkSessionHandler<TSessions, TEntryLog>
where
    TSessions: OpenSessionStore + ?Sized,
    TEntryLog: EntryLog + ?Sized,
{
    pub fn new(sessions: Arc<TSessions>, entry_log: Arc<TEntryLog>) -> Self {
        Self {
            sessions,
            entry_log,
        }
    }

    /// Persist the running session as a work entry, then forget it.
    ///
    /// The open session is only removed after the append succeeded.
    pub async fn handle(
        &self,
        key: &SessionKey,
        now: DateTime<Utc>,
    ) -> Result<StopDecision, ApplicationError> {
        let state = SessionState::from(self.sessions.get(key).await?);
        let decision = decide_stop(&state, now);

        match &decision {
            StopDecision::Completed { entry } => {
                self.entry_log.append(entry).await?;
                self.sessions.remove(key).await?;
                tracing::info!(
                    session = %key,
                    duration = entry.duration_hours,
                    "stopped work session"
                );
            }
            StopDecision::NothingToStop => {
                tracing::info!(session = %key, "no work session to stop");
            }
        }
        Ok(decision)
    }
}
