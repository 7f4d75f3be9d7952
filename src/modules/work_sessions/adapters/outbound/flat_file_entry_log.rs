// Entry log backed by a newline separated flat file.
//
// Purpose
// - Durable store for completed work sessions, one `date|start|end|duration` record per line.
//
// Responsibilities
// - Treat a missing file as an empty log.
// - Append each entry as a single newline terminated write.
//
// Boundaries
// - No locking. Readers only see complete lines written before they opened the file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::modules::work_sessions::core::ports::{EntryLog, EntryLogError};
use crate::modules::work_sessions::core::work_entry::{WorkEntry, parse_entries};

#[derive(Debug, Clone)]
pub struct FlatFileEntryLog {
    path: PathBuf,
}

impl FlatFileEntryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EntryLog for FlatFileEntryLog {
    async fn load(&self) -> Result<Vec<WorkEntry>, EntryLogError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "entry log does not exist yet");
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };
        Ok(parse_entries(&String::from_utf8_lossy(&bytes)))
    }

    async fn append(&self, entry: &WorkEntry) -> Result<(), EntryLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        let line = format!("{}\n", entry.to_line());
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod flat_file_entry_log_tests {
    use super::*;
    use crate::tests::fixtures::work_entries::make_work_entry;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn before_each() -> (TempDir, FlatFileEntryLog) {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let log = FlatFileEntryLog::new(dir.path().join("db.txt"));
        (dir, log)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_empty_log_when_the_file_does_not_exist(
        before_each: (TempDir, FlatFileEntryLog),
    ) {
        let (_dir, log) = before_each;
        assert!(!log.path().exists());
        assert!(log.load().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_lines_and_load_them_in_order(
        before_each: (TempDir, FlatFileEntryLog),
    ) {
        let (_dir, log) = before_each;
        let first = make_work_entry("2024-06-10", "09:00:00", "17:00:00", 8.0);
        let second = make_work_entry("2024-06-10", "18:00:00", "19:30:00", 1.5);

        log.append(&first).await.unwrap();
        log.append(&second).await.unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            contents,
            "2024-06-10|09:00:00|17:00:00|8.00\n2024-06-10|18:00:00|19:30:00|1.50\n"
        );
        assert_eq!(log.load().await.unwrap(), vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_malformed_and_non_utf8_lines(before_each: (TempDir, FlatFileEntryLog)) {
        let (_dir, log) = before_each;
        let mut contents = b"2024-06-10|09:00:00|17:00:00|8.00\n".to_vec();
        contents.extend_from_slice(b"2024-06-\xff\xfe|09:00:00|17:00:00|8.00\n");
        contents.extend_from_slice(b"2024-06-10|09:00:00|17:00:00\n");
        contents.extend_from_slice(b"2024-06-11|10:00:00|11:00:00|oops\n");
        std::fs::write(log.path(), contents).unwrap();

        let entries = log.load().await.unwrap();
        assert_eq!(
            entries,
            vec![
                make_work_entry("2024-06-10", "09:00:00", "17:00:00", 8.0),
                make_work_entry("2024-06-11", "10:00:00", "11:00:00", 0.0),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_the_same_entries_twice(before_each: (TempDir, FlatFileEntryLog)) {
        let (_dir, log) = before_each;
        std::fs::write(
            log.path(),
            "2024-06-10|09:00:00|17:00:00|8.00\n2024-06-09|09:00:00|10:00:00|1.00\n",
        )
        .unwrap();
        assert_eq!(log.load().await.unwrap(), log.load().await.unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_path_is_not_a_readable_file(
        before_each: (TempDir, FlatFileEntryLog),
    ) {
        let (dir, _) = before_each;
        let log = FlatFileEntryLog::new(dir.path());
        let result = log.load().await;
        assert!(matches!(result, Err(EntryLogError::Io(_))));
    }
}
