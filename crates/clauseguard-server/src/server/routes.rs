use crate::server::error::ApiError;
use crate::server::page::INDEX_HTML;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use clauseguard_core::{ContractReport, DocumentFormat, Error, ReportSummary};
use clauseguard_extract::ExtractedDocument;
use serde::{Deserialize, Serialize};
use tracing::info_span;
use uuid::Uuid;

/// Multipart field carrying the uploaded contract
pub const UPLOAD_FIELD: &str = "file";

// ============================================================================
// Page and health endpoints
// ============================================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

// ============================================================================
// Rule table endpoint
// ============================================================================

pub async fn list_rules(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.rules.as_ref().clone())
}

// ============================================================================
// Extraction and review endpoints
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadReviewResponse {
    #[serde(flatten)]
    pub document: ExtractedDocument,
    pub report: ContractReport,
    pub summary: ReportSummary,
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

pub async fn extract(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractedDocument>, ApiError> {
    let upload = read_upload(multipart?).await?;
    let document = run_blocking(move || extract_upload(&state, &upload)).await?;
    Ok(Json(document))
}

pub async fn review(
    State(state): State<AppState>,
    req: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ContractReport>, ApiError> {
    let Json(req) = req?;
    let report = run_blocking(move || {
        let _span = info_span!("review", request_id = %Uuid::new_v4()).entered();
        Ok(state.pipeline.analyze(&req.text))
    })
    .await?;
    Ok(Json(report))
}

pub async fn review_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadReviewResponse>, ApiError> {
    let upload = read_upload(multipart?).await?;
    let response = run_blocking(move || {
        let _span = info_span!(
            "review_upload",
            request_id = %Uuid::new_v4(),
            file = %upload.file_name
        )
        .entered();

        let document = extract_upload(&state, &upload)?;
        let report = state.pipeline.analyze(&document.text);
        let summary = report.summary();
        Ok(UploadReviewResponse {
            document,
            report,
            summary,
        })
    })
    .await?;
    Ok(Json(response))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::bad_request("upload has no file name"))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        return Ok(Upload { file_name, bytes });
    }

    Err(ApiError::bad_request(format!(
        "missing multipart field '{}'",
        UPLOAD_FIELD
    )))
}

fn extract_upload(state: &AppState, upload: &Upload) -> Result<ExtractedDocument, ApiError> {
    if state.config.strict_formats && !DocumentFormat::is_declared(&upload.file_name) {
        return Err(Error::unsupported_format(format!(
            "'{}' is not a .pdf, .docx or .txt file",
            upload.file_name
        ))
        .into());
    }

    Ok(state.extractor.extract(&upload.file_name, &upload.bytes)?)
}

/// Extraction and classification are CPU-bound; keep them off the reactor.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
}
