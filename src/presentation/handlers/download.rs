use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::application::services::ArtifactQueryError;
use crate::domain::JobId;
use crate::presentation::handlers::process_url::ErrorResponse;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path((job_id, artifact_name)): Path<(String, String)>,
) -> Response {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid job ID: {}", job_id),
            );
        }
    };

    match state
        .queries
        .artifact(JobId::from_uuid(uuid), &artifact_name)
        .await
    {
        Ok(artifact) => {
            let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, artifact.content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                Body::from(artifact.data),
            )
                .into_response()
        }
        Err(ArtifactQueryError::NotFound(_)) => error_response(
            StatusCode::NOT_FOUND,
            format!("Job not found: {}", job_id),
        ),
        Err(ArtifactQueryError::NotReady(status)) => error_response(
            StatusCode::BAD_REQUEST,
            format!("Job not completed yet: status is {}", status),
        ),
        Err(ArtifactQueryError::UnknownArtifact(name)) => error_response(
            StatusCode::BAD_REQUEST,
            format!("Unknown artifact: {}", name),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch artifact");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch artifact: {}", e),
            )
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
