use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::work_sessions::core::periods::reference_date;
use crate::modules::work_sessions::use_cases::compute_averages::aggregate::compute_averages;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.entry_log.load().await {
        Ok(entries) => {
            Json(compute_averages(&entries, reference_date(state.clock.now()))).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to load work entries");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
