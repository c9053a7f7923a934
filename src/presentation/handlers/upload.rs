use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {e}"),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let content_type = match ContentType::from_mime(&content_type_str) {
        Some(ct) => ct,
        None => {
            tracing::warn!(content_type = %content_type_str, "rejected unsupported upload");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!(
                        "Unsupported content type: {content_type_str}. Upload a PDF or plain text file."
                    ),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {e}"),
                }),
            )
                .into_response();
        }
    };

    let document = Document::new(filename.clone(), content_type, data.len() as u64);
    let document_id = document.id;

    if let Err(e) = state.document_store.put(document, data).await {
        tracing::error!(error = %e, "failed to store uploaded document");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to store document: {e}"),
            }),
        )
            .into_response();
    }

    tracing::info!(
        document_id = %document_id.as_uuid(),
        filename = %filename,
        "document uploaded"
    );

    (
        StatusCode::OK,
        Json(UploadResponse {
            document_id: document_id.as_uuid().to_string(),
            filename,
        }),
    )
        .into_response()
}
