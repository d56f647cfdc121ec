//! GET /health — probes the chat backend.

use std::sync::Arc;

use axum::{Json, extract::State};
use qa_llm_service::HealthStatus;

use crate::core::app_state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.health.check(&state.qa_config).await)
}
