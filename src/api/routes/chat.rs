use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Stateless single-turn chat. Upstream failures are absorbed into the
/// fallback text and the endpoint always answers 200, so the front-end only
/// ever deals with one payload shape.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = state.chat_service.answer_or_fallback(&request.message).await;
    Json(ChatResponse { message })
}
