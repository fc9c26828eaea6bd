use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{RobotList, HEALTHZ_PATH, ROBOTS_COLLECTION_PATH},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod fixture;

use config::load_settings;
use fixture::RobotSource;

#[derive(Clone)]
struct AppState {
    robots: RobotSource,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings()?;
    let robots = RobotSource::from_settings(settings.robots_file.as_deref());
    match &robots {
        RobotSource::File(path) => info!(path = %path.display(), "serving robots from fixture file"),
        RobotSource::Static(list) => info!(count = list.len(), "serving built-in robots"),
    }

    let app = build_router(Arc::new(AppState { robots }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTHZ_PATH, get(healthz))
        .route(ROBOTS_COLLECTION_PATH, get(list_robots))
        .fallback(not_found)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_robots(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RobotList>, (StatusCode, Json<ApiError>)> {
    state.robots.robots().await.map(Json).map_err(|e| {
        let message = format!("{e:#}");
        error!(error = %message, "robots fixture unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new(ErrorCode::Unavailable, message)),
        )
    })
}

async fn not_found() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ErrorCode::NotFound, "no such route")),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
