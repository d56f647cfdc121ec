use std::sync::Arc;

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use crate::routes::{
    ask::ask_question_route::ask_question, health_route::health, index_route::index,
    upload::upload_image_route::upload_image,
};

/// Builds the application router on top of shared state.
///
/// Factored out of [`start`] so integration tests can drive the router
/// directly with `tower::ServiceExt::oneshot`.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Body cap applies app-wide, not only to /upload.
    let body_limit = state.upload_limit_mb * 1024 * 1024;

    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_image))
        .route("/ask", post(ask_question))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Starts the HTTP server; runs until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);
    let addr = state.bind_address.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(%addr, "celebrity QA API listening");

    // Start server with graceful shutdown on Ctrl+C.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
