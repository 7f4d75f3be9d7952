// In memory entry log.
//
// Keeps raw lines rather than parsed entries so malformed records behave exactly as they do
// in the flat file.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::work_sessions::core::ports::{EntryLog, EntryLogError};
use crate::modules::work_sessions::core::work_entry::{WorkEntry, parse_entries};

#[derive(Default)]
pub struct InMemoryEntryLog {
    lines: RwLock<Vec<String>>,
    is_offline: bool,
}

impl InMemoryEntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RwLock::new(lines.into_iter().map(Into::into).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }
}

#[async_trait]
impl EntryLog for InMemoryEntryLog {
    async fn load(&self) -> Result<Vec<WorkEntry>, EntryLogError> {
        if self.is_offline {
            return Err(EntryLogError::Backend("Entry log offline".into()));
        }
        let contents = self.lines.read().await.join("\n");
        Ok(parse_entries(&contents))
    }

    async fn append(&self, entry: &WorkEntry) -> Result<(), EntryLogError> {
        if self.is_offline {
            return Err(EntryLogError::Backend("Entry log offline".into()));
        }
        self.lines.write().await.push(entry.to_line());
        Ok(())
    }
}
