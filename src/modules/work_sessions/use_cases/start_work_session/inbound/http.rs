use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::work_sessions::adapters::inbound::session_cookie::{
    read_session_key, session_cookie,
};
use crate::modules::work_sessions::core::open_session::SessionKey;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct StartWorkSessionResponse {
    pub status: &'static str,
    pub start_time: String,
}

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (key, is_new_key) = match read_session_key(&headers) {
        Some(key) => (key, false),
        None => (SessionKey::generate(), true),
    };

    match state.start_handler.handle(&key, state.clock.now()).await {
        Ok(session) => {
            let body = Json(StartWorkSessionResponse {
                status: "started",
                start_time: session.formatted_start(),
            });
            if is_new_key {
                ([(SET_COOKIE, session_cookie(&key))], body).into_response()
            } else {
                body.into_response()
            }
        }
        Err(error) => {
            tracing::error!(%error, "failed to start work session");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
