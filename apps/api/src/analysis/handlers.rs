//! Axum route handlers for the analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::intake;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields are optional so presence can be validated with a descriptive 400
/// instead of a bare deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Scores a resume against a job description. Empty strings are accepted and
/// produce the degraded record; missing fields are a validation error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resume_text = request
        .resume_text
        .ok_or_else(|| AppError::Validation("resume_text is required".to_string()))?;
    let job_description = request
        .job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    Ok(Json(
        run_analysis(&state, &resume_text, &job_description, None).await,
    ))
}

/// POST /analyze/file
///
/// Multipart variant: a `resume` file part (PDF or plain text) plus a
/// `job_description` text part. The extracted text flows through the same
/// pipeline as the JSON endpoint.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume: Option<(String, Option<String>, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume file: {e}")))?;
                if data.len() > state.config.max_upload_bytes {
                    return Err(AppError::Validation(format!(
                        "Resume file exceeds the {} byte upload limit",
                        state.config.max_upload_bytes
                    )));
                }
                resume = Some((file_name, content_type, data));
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            // Unknown parts are ignored rather than rejected.
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    let resume_text = intake::extract_resume_text(&file_name, content_type.as_deref(), &data)?;

    Ok(Json(
        run_analysis(&state, &resume_text, &job_description, Some(file_name)).await,
    ))
}

async fn run_analysis(
    state: &AppState,
    resume_text: &str,
    job_description: &str,
    resume_file_name: Option<String>,
) -> AnalyzeResponse {
    let analysis_id = Uuid::new_v4();
    let outcome = state.analyzer.analyze(resume_text, job_description).await;

    if let Some(reason) = outcome.degraded_reason() {
        warn!(%analysis_id, reason, "returning degraded analysis");
    }

    let report = outcome.into_report();
    info!(%analysis_id, fit_score = report.fit_score, "analysis complete");

    AnalyzeResponse {
        analysis_id,
        resume_file_name,
        report,
    }
}
