use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub filename: String,
    pub analysis: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Legacy one-shot analysis endpoint. Extraction and provider failures are
/// embedded in the `analysis` body rather than surfaced as HTTP failures.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F, L>(
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
            tracing::warn!("analyze request with no file");
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

    if !filename.ends_with(".pdf") {
        tracing::warn!(filename = %filename, "rejected non-pdf analyze request");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid file type. Please upload a PDF.".to_string(),
            }),
        )
            .into_response();
    }

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

    let analysis = state.analysis_service.analyze(&data, &filename).await;

    (
        StatusCode::OK,
        Json(AnalyzeResponse { filename, analysis }),
    )
        .into_response()
}
