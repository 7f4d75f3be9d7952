// Ports define what the work session core needs from the outside world, without implementing it.
//
// Adapters live under `adapters::outbound`: a flat file for production and in memory variants
// for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::work_sessions::core::open_session::{OpenSession, SessionKey};
use crate::modules::work_sessions::core::work_entry::WorkEntry;

#[derive(Debug, Error)]
pub enum EntryLogError {
    #[error("entry log i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Append-only log of completed work sessions.
#[async_trait]
pub trait EntryLog: Send + Sync {
    /// All readable entries in append order. A log that does not exist yet is empty.
    async fn load(&self) -> Result<Vec<WorkEntry>, EntryLogError>;

    async fn append(&self, entry: &WorkEntry) -> Result<(), EntryLogError>;
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait OpenSessionStore: Send + Sync {
    async fn get(&self, key: &SessionKey) -> Result<Option<OpenSession>, SessionStoreError>;

    async fn put(&self, key: &SessionKey, session: OpenSession) -> Result<(), SessionStoreError>;

    async fn remove(&self, key: &SessionKey) -> Result<Option<OpenSession>, SessionStoreError>;
}
