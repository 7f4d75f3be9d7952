use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::work_sessions::adapters::inbound::session_cookie::read_session_key;
use crate::modules::work_sessions::use_cases::stop_work_session::decision::StopDecision;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StopWorkSessionResponse {
    Stopped { duration: f64 },
    NoSession,
}

impl From<StopDecision> for StopWorkSessionResponse {
    fn from(decision: StopDecision) -> Self {
        match decision {
            StopDecision::Completed { entry } => StopWorkSessionResponse::Stopped {
                duration: entry.duration_hours,
            },
            StopDecision::NothingToStop => StopWorkSessionResponse::NoSession,
        }
    }
}

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(key) = read_session_key(&headers) else {
        return Json(StopWorkSessionResponse::NoSession).into_response();
    };

    match state.stop_handler.handle(&key, state.clock.now()).await {
        Ok(decision) => Json(StopWorkSessionResponse::from(decision)).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to stop work session");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
