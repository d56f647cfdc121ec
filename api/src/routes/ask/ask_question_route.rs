//! POST /ask — answers a question about a named celebrity.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask
///
/// The QA client converts every upstream failure into its fixed fallback
/// sentence, so this handler answers 200 even when the model call failed.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask \
///   -H 'content-type: application/json' \
///   -d '{"name":"Tom Hanks","question":"What is his most famous role?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(body) = body?;

    let name = body.name.trim();
    let question = body.question.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if question.is_empty() {
        return Err(AppError::BadRequest("question must not be empty".into()));
    }

    let answer = state.qa.ask_about_celebrity(name, question).await;

    Ok(Json(AskResponse { answer }))
}
