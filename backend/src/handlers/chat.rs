use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::AppState;
use crate::models::{ChatRequest, ChatResponse};
use crate::utils::ApiResult;

/// Triage one user message
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Triage reply", body = ChatResponse),
        (status = 400, description = "Malformed body (4001), wrong field types (4002) or empty message (4003)"),
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = payload?;

    tracing::info!(
        "Chat request: conversation_id={}, chars={}",
        req.conversation_id.as_deref().unwrap_or("-"),
        req.message.chars().count()
    );

    let reply = state.orchestrator.triage(&req.to_utterance()).await?;
    tracing::debug!(
        "Chat reply: language={}, urgency={}",
        reply.language,
        reply.urgency.as_str()
    );

    Ok(Json(ChatResponse::from(reply)))
}
