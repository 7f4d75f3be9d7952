use thiserror::Error;

use crate::modules::work_sessions::core::ports::{EntryLogError, SessionStoreError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EntryLog(#[from] EntryLogError),

    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),
}
