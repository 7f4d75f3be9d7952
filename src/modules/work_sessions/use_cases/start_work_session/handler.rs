use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::work_sessions::core::open_session::{OpenSession, SessionKey, SessionState};
use crate::modules::work_sessions::core::ports::OpenSessionStore;
use crate::modules::work_sessions::use_cases::errors::ApplicationError;
use crate::modules::work_sessions::use_cases::start_work_session::decide::decide_start;

pub struct StartWorkSessionHandler<TSessions>
where
    TSessions: OpenSessionStore + ?Sized,
{
    sessions: Arc<TSessions>,
}

impl<TSessions> StartWorkSessionHandler<TSessions>
where
    TSessions: OpenSessionStore + ?Sized,
{
    pub fn new(sessions: Arc<TSessions>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        key: &SessionKey,
        now: DateTime<Utc>,
    ) -> Result<OpenSession, ApplicationError> {
        let state = SessionState::from(self.sessions.get(key).await?);
        let decision = decide_start(&state, now);
        self.sessions.put(key, decision.session).await?;

        if let Some(replaced) = decision.replaced {
            tracing::info!(
                session = %key,
                replaced_start = %replaced.formatted_start(),
                "restarted work session"
            );
        }
        tracing::info!(
            session = %key,
            start_time = %decision.session.formatted_start(),
            "started work session"
        );
        Ok(decision.session)
    }
}
