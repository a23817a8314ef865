use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::JobStoreError;
use crate::domain::JobId;
use crate::presentation::handlers::process_url::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// Administrative removal of a job record and its artifacts.
#[tracing::instrument(skip(state))]
pub async fn delete_job_handler(
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

    match state.job_store.delete(JobId::from_uuid(uuid)).await {
        Ok(()) => {
            tracing::info!(job_id = %job_id, "Job deleted");
            (
                StatusCode::OK,
                Json(DeletedResponse {
                    message: format!("Job deleted: {}", job_id),
                }),
            )
                .into_response()
        }
        Err(JobStoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", job_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete job");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to delete job: {}", e),
                }),
            )
                .into_response()
        }
    }
}
