use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;

use crate::error::{AppError, AppResult};
use crate::models::{LinkPreview, MetaRecord};
use crate::scanner;
use crate::state::AppState;

/// Run the scanner over a request body on the blocking pool.
async fn scan_body(state: &AppState, body: Result<Bytes, BytesRejection>) -> AppResult<MetaRecord> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(state.max_document_bytes),
        _ => AppError::Validation(rejection.body_text()),
    })?;

    if body.len() > state.max_document_bytes {
        return Err(AppError::PayloadTooLarge(state.max_document_bytes));
    }

    let len = body.len();
    let record = tokio::task::spawn_blocking(move || scanner::extract(body.as_ref()))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "Extraction task failed");
            AppError::Internal
        })?;

    tracing::debug!(bytes = len, empty = record.is_empty(), "Extracted metadata");
    Ok(record)
}

/// POST /extract
///
/// The request body is the raw HTML document. Responds with every extracted
/// field; fields with no source in the document are empty strings.
pub async fn extract_metadata(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<MetaRecord>> {
    scan_body(&state, body).await.map(Json)
}

/// POST /extract/preview
///
/// Same input as `/extract`, answered with the fallback-resolved
/// [`LinkPreview`] view.
pub async fn extract_preview(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<LinkPreview>> {
    let record = scan_body(&state, body).await?;
    Ok(Json(record.preview()))
}
