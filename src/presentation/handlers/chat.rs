use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::ChatError;
use crate::domain::{ChatTurn, DocumentId, TurnRole};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub document_id: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

/// History items arrive with free-form role strings; the mapping to a turn
/// role is total, so a malformed item can never fail the request.
#[derive(Deserialize)]
pub struct HistoryItem {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let ChatRequest {
        document_id,
        message,
        history,
    } = request;

    tracing::debug!(message = %sanitize_prompt(&message), "processing chat request");

    // An id that never came from /upload is by definition not found.
    let Some(handle) = DocumentId::parse(&document_id) else {
        return not_found(&document_id);
    };

    let history: Vec<ChatTurn> = history
        .into_iter()
        .map(|item| ChatTurn::new(TurnRole::from_wire(&item.role), item.content))
        .collect();

    match state.chat_service.chat(handle, &message, &history).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply })).into_response(),
        Err(e @ ChatError::DocumentNotFound(_)) => {
            tracing::warn!(error = %e, "chat request for unknown document");
            not_found(&document_id)
        }
        Err(e) => {
            tracing::error!(error = %e, "chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Chat failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}

fn not_found(document_id: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Document not found: {document_id}"),
        }),
    )
        .into_response()
}
