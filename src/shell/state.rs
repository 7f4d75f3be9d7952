use std::sync::Arc;

use crate::modules::work_sessions::core::ports::{EntryLog, OpenSessionStore};
use crate::modules::work_sessions::use_cases::start_work_session::handler::StartWorkSessionHandler;
use crate::modules::work_sessions::use_cases::stop_work_session::handler::StopWorkSessionHandler;
use crate::shared::core::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub entry_log: Arc<dyn EntryLog>,
    pub clock: Arc<dyn Clock>,
    pub start_handler: Arc<StartWorkSessionHandler<dyn OpenSessionStore>>,
    pub stop_handler: Arc<StopWorkSessionHandler<dyn OpenSessionStore, dyn EntryLog>>,
}

impl AppState {
    pub fn new(
        entry_log: Arc<dyn EntryLog>,
        sessions: Arc<dyn OpenSessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            start_handler: Arc::new(StartWorkSessionHandler::new(sessions.clone())),
            stop_handler: Arc::new(StopWorkSessionHandler::new(sessions, entry_log.clone())),
            entry_log,
            clock,
        }
    }
}
