use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::work_sessions::core::periods::reference_date;
use crate::modules::work_sessions::core::work_entry::{DATE_FORMAT, WorkEntry};
use crate::modules::work_sessions::use_cases::list_last_seven_days::select::entries_in_last_seven_days;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryView {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
}

impl From<WorkEntry> for WorkEntryView {
    fn from(entry: WorkEntry) -> Self {
        Self {
            date: entry.date.format(DATE_FORMAT).to_string(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            duration: entry.duration_hours,
        }
    }
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.entry_log.load().await {
        Ok(entries) => {
            let views: Vec<WorkEntryView> =
                entries_in_last_seven_days(&entries, reference_date(state.clock.now()))
                    .into_iter()
                    .map(Into::into)
                    .collect();
            Json(views).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to load work entries");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
