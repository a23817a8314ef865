use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::QueryError;
use crate::domain::{Job, JobId, ProcessingOptions, ProcessingSummary};
use crate::presentation::handlers::process_url::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    pub progress: u8,
    pub current_stage: String,
    pub message: String,
    pub input_type: String,
    pub source: String,
    pub options: ProcessingOptions,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result fields exposed over the wire; artifact bytes stay server-side.
#[derive(Serialize)]
pub struct ResultsView {
    pub generated_files: Vec<String>,
    pub processing_summary: ProcessingSummary,
}

impl JobStatusResponse {
    fn from_job(job: Job) -> Self {
        Self {
            job_id: job.id.to_string(),
            status: job.status.as_str().to_string(),
            progress: job.progress,
            current_stage: job.stage_label,
            message: job.message,
            input_type: job.input.kind.as_str().to_string(),
            source: job.input.reference,
            options: job.options,
            created_at: job.created_at.to_rfc3339(),
            completed_at: job.completed_at.map(|t| t.to_rfc3339()),
            results: job.result.map(|r| ResultsView {
                generated_files: r.generated_files,
                processing_summary: r.processing_summary,
            }),
            error: job.error,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    match state.queries.status(JobId::from_uuid(uuid)).await {
        Ok(job) => (StatusCode::OK, Json(JobStatusResponse::from_job(job))).into_response(),
        Err(QueryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", job_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch job: {}", e),
                }),
            )
                .into_response()
        }
    }
}
