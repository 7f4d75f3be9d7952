use axum::body::Body;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::work_sessions::adapters::outbound::in_memory_entry_log::InMemoryEntryLog;
use crate::modules::work_sessions::adapters::outbound::in_memory_session_store::InMemorySessionStore;
use crate::shared::core::clock::FixedClock;
use crate::shell::state::AppState;

/// 2024-06-10 17:00:00 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 17, 0, 0).unwrap()
}

pub fn make_test_state(entry_log: InMemoryEntryLog, now: DateTime<Utc>) -> AppState {
    AppState::new(
        Arc::new(entry_log),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(FixedClock(now)),
    )
}

pub fn make_offline_entry_log_state() -> AppState {
    let mut entry_log = InMemoryEntryLog::new();
    entry_log.toggle_offline();
    make_test_state(entry_log, fixed_now())
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
