// In memory store of open work sessions, keyed by session key.
//
// Open sessions are not durable: restarting the process abandons every running session.
// Sessions older than `max_age` relative to the newest start are dropped on every `put`, so keys
// abandoned by clients that never stop do not pile up.

use async_trait::async_trait;
use chrono::TimeDelta;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::work_sessions::core::open_session::{OpenSession, SessionKey};
use crate::modules::work_sessions::core::ports::{OpenSessionStore, SessionStoreError};

pub const DEFAULT_MAX_SESSION_AGE_DAYS: i64 = 7;

pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionKey, OpenSession>>,
    max_age: TimeDelta,
    is_offline: bool,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self {
            sessions: RwLock::default(),
            max_age: TimeDelta::days(DEFAULT_MAX_SESSION_AGE_DAYS),
            is_offline: false,
        }
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_age(max_age: TimeDelta) -> Self {
        Self {
            max_age,
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SessionStoreError> {
        if self.is_offline {
            return Err(SessionStoreError::Backend("Session store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl OpenSessionStore for InMemorySessionStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<OpenSession>, SessionStoreError> {
        self.ensure_online()?;
        Ok(self.sessions.read().await.get(key).copied())
    }

    async fn put(&self, key: &SessionKey, session: OpenSession) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        let mut sessions = self.sessions.write().await;
        let cutoff = session.started_at - self.max_age;
        sessions.retain(|_, open| open.started_at >= cutoff);
        sessions.insert(key.clone(), session);
        Ok(())
    }

    async fn remove(&self, key: &SessionKey) -> Result<Option<OpenSession>, SessionStoreError> {
        self.ensure_online()?;
        Ok(self.sessions.write().await.remove(key))
    }
}

#[cfg(test)]
mod in_memory_session_store_tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (SessionKey, OpenSession, InMemorySessionStore) {
        let key = SessionKey::new("session-0001");
        let session = OpenSession::starting_at(Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap());
        (key, session, InMemorySessionStore::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_put_and_get_the_open_session(
        before_each: (SessionKey, OpenSession, InMemorySessionStore),
    ) {
        let (key, session, store) = before_each;
        store.put(&key, session).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(session));
        assert_eq!(store.get(&SessionKey::new("other")).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_the_open_session(
        before_each: (SessionKey, OpenSession, InMemorySessionStore),
    ) {
        let (key, session, store) = before_each;
        store.put(&key, session).await.unwrap();
        assert_eq!(store.remove(&key).await.unwrap(), Some(session));
        assert_eq!(store.get(&key).await.unwrap(), None);
        assert_eq!(store.remove(&key).await.unwrap(), None);
    }

    #[rstest]
    #[case::abandoned_long_ago(TimeDelta::days(8), false)]
    #[case::still_within_max_age(TimeDelta::days(6), true)]
    #[tokio::test]
    async fn it_should_sweep_sessions_older_than_max_age_on_put(
        before_each: (SessionKey, OpenSession, InMemorySessionStore),
        #[case] gap: TimeDelta,
        #[case] kept: bool,
    ) {
        let (key, session, store) = before_each;
        let later_key = SessionKey::new("session-0002");
        let later = OpenSession::starting_at(session.started_at + gap);

        store.put(&key, session).await.unwrap();
        store.put(&later_key, later).await.unwrap();

        assert_eq!(store.get(&key).await.unwrap().is_some(), kept);
        assert_eq!(store.get(&later_key).await.unwrap(), Some(later));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_honour_a_custom_max_age() {
        let store = InMemorySessionStore::with_max_age(TimeDelta::hours(1));
        let start = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let old_key = SessionKey::new("old");
        let new_key = SessionKey::new("new");

        store.put(&old_key, OpenSession::starting_at(start)).await.unwrap();
        store
            .put(&new_key, OpenSession::starting_at(start + TimeDelta::hours(2)))
            .await
            .unwrap();

        assert_eq!(store.get(&old_key).await.unwrap(), None);
        assert!(store.get(&new_key).await.unwrap().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_session_store_is_offline(
        before_each: (SessionKey, OpenSession, InMemorySessionStore),
    ) {
        let (key, session, mut store) = before_each;
        store.toggle_offline();
        assert!(store.put(&key, session).await.is_err());
        assert!(
            store
                .get(&key)
                .await
                .unwrap_err()
                .to_string()
                .contains("Session store offline")
        );
    }
}
