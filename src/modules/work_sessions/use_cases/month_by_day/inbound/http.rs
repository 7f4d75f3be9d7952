use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;

use crate::modules::work_sessions::core::periods::reference_date;
use crate::modules::work_sessions::use_cases::month_by_day::group::group_by_day_of_month;
use crate::shell::state::AppState;

/// Hours per day keyed by two-digit day of month ("01" to "31").
pub type MonthView = BTreeMap<String, f64>;

pub fn to_month_view(days: BTreeMap<u32, f64>) -> MonthView {
    days.into_iter()
        .map(|(day, hours)| (format!("{day:02}"), hours))
        .collect()
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.entry_log.load().await {
        Ok(entries) => {
            let days = group_by_day_of_month(&entries, reference_date(state.clock.now()));
            Json(to_month_view(days)).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to load work entries");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
