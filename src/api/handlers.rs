//! HTTP request handlers for the annotation service.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::batch::BatchAnnotator;
use crate::error::AnnotateError;
use crate::processing::FileAnnotator;
use crate::types::{
    AnnotateRequest, AnnotateResponse, AnnotatorConfig, BatchFileError, BatchRequest,
    BatchResponse, ChunkListResponse, ChunkRecord,
};

/// Application state shared across handlers.
pub struct AppState {
    pub annotator: Arc<FileAnnotator>,
    pub config: AnnotatorConfig,
}

/// JSON error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Wrapper mapping per-file errors onto HTTP responses.
pub struct ApiError(AnnotateError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AnnotateError::UnsupportedLanguage { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AnnotateError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<AnnotateError> for ApiError {
    fn from(err: AnnotateError) -> Self {
        Self(err)
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Supported languages response.
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    languages: Vec<&'static str>,
}

/// List languages with a registered front-end.
pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state.annotator.languages(),
    })
}

fn check_size(state: &AppState, path: &str, len: usize) -> Result<(), ApiError> {
    if len > state.config.max_file_size {
        return Err(ApiError(AnnotateError::FileTooLarge {
            path: path.to_string(),
            size: len,
            limit: state.config.max_file_size,
        }));
    }
    Ok(())
}

/// Annotate one file, returning the marked-up text.
pub async fn annotate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, ApiError> {
    check_size(&state, &request.file.path, request.file.content.len())?;

    let (content, chunk_count) = state.annotator.annotate_counted(&request.file)?;

    info!(path = %request.file.path, chunks = chunk_count, "Annotated file");

    Ok(Json(AnnotateResponse {
        path: request.file.path,
        content,
        chunk_count,
    }))
}

/// Remove all markers from one file.
pub async fn strip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, ApiError> {
    check_size(&state, &request.file.path, request.file.content.len())?;

    let content = state.annotator.strip(&request.file)?;

    Ok(Json(AnnotateResponse {
        path: request.file.path,
        content,
        chunk_count: 0,
    }))
}

/// Return the structured chunk list for one file without mutating it.
pub async fn chunks(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<ChunkListResponse>, ApiError> {
    check_size(&state, &request.file.path, request.file.content.len())?;

    let chunks: Vec<ChunkRecord> = state.annotator.chunks(&request.file)?;

    Ok(Json(ChunkListResponse {
        path: request.file.path,
        chunks,
    }))
}

/// Annotate a batch of files with per-file error isolation.
pub async fn annotate_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, StatusCode> {
    let total = request.files.len();
    if total == 0 {
        return Ok(Json(BatchResponse {
            files: Vec::new(),
            total: 0,
            processed: 0,
            failed: 0,
            errors: Vec::new(),
        }));
    }

    info!(files = total, "Received batch annotation request");

    let batch = BatchAnnotator::new(Arc::clone(&state.annotator), state.config.clone());
    let (annotated, result) = batch
        .process_batch(request.files)
        .await
        .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;

    Ok(Json(BatchResponse {
        files: annotated
            .into_iter()
            .map(|f| AnnotateResponse {
                path: f.path,
                content: f.content,
                chunk_count: f.chunk_count,
            })
            .collect(),
        total,
        processed: result.processed_files,
        failed: result.failed_files,
        errors: result
            .errors
            .into_iter()
            .map(|e| BatchFileError {
                path: e.path,
                error: e.error,
            })
            .collect(),
    }))
}
