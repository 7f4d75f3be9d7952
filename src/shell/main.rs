use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use work_timer::modules::work_sessions::adapters::outbound::flat_file_entry_log::FlatFileEntryLog;
use work_timer::modules::work_sessions::adapters::outbound::in_memory_session_store::InMemorySessionStore;
use work_timer::shared::core::clock::SystemClock;
use work_timer::shell::config::AppConfig;
use work_timer::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use work_timer::shell::http::router;
use work_timer::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let state = AppState::new(
        Arc::new(FlatFileEntryLog::new(config.entry_log_path.clone())),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(SystemClock),
    );
    let schema = build_schema(state.clone());

    let app = router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(entry_log = %config.entry_log_path.display(), "using entry log");
    tracing::info!("HTTP endpoint: http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
