use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::modules::work_sessions::use_cases::compute_averages::inbound::http as stats_http;
use crate::modules::work_sessions::use_cases::list_last_seven_days::inbound::http as seven_days_http;
use crate::modules::work_sessions::use_cases::month_by_day::inbound::http as month_http;
use crate::modules::work_sessions::use_cases::start_work_session::inbound::http as start_http;
use crate::modules::work_sessions::use_cases::stop_work_session::inbound::http as stop_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dispatch_action))
        .route("/start", post(start_http::handle))
        .route("/stop", post(stop_http::handle))
        .route("/stats", get(stats_http::handle))
        .route("/7days", get(seven_days_http::handle))
        .route("/month", get(month_http::handle))
        .with_state(state)
}

#[derive(Deserialize)]
pub struct ActionParams {
    pub action: Option<String>,
}

/// Single endpoint form of the API: `GET /?action=start|stop|stats|7days|month`.
pub async fn dispatch_action(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
    headers: HeaderMap,
) -> Response {
    match params.action.as_deref() {
        Some("start") => start_http::handle(State(state), headers).await,
        Some("stop") => stop_http::handle(State(state), headers).await,
        Some("stats") => stats_http::handle(State(state)).await,
        Some("7days") => seven_days_http::handle(State(state)).await,
        Some("month") => month_http::handle(State(state)).await,
        other => {
            tracing::debug!(action = ?other, "unknown action");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
