use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::ProcessingMessage;
use crate::domain::{InputSource, Job, ProcessingOptions};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ProcessUrlRequest {
    pub source_url: Option<String>,
    #[serde(default)]
    pub options: ProcessingOptions,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, body))]
pub async fn process_url_handler(
    State(state): State<AppState>,
    Json(body): Json<ProcessUrlRequest>,
) -> Response {
    let source_url = match body.source_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            tracing::warn!("URL submission without source_url");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "source_url is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    submit(&state, InputSource::Url { url: source_url }, body.options).await
}

/// Creates the job record, enqueues the work and answers the submitter.
///
/// Validation happens before this point, so a record is only ever created for
/// an accepted submission. If the queue is gone the freshly created record is
/// removed again to avoid orphans.
pub(super) async fn submit(
    state: &AppState,
    input: InputSource,
    options: ProcessingOptions,
) -> Response {
    let job = Job::new(input.descriptor(), options.clone());
    let job_id = job.id;

    if let Err(e) = state.job_store.create(&job).await {
        tracing::error!(error = %e, "Failed to create job record");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to create job: {}", e),
            }),
        )
            .into_response();
    }

    let msg = ProcessingMessage {
        job_id,
        input,
        options,
    };

    if state.sender.send(msg).await.is_err() {
        tracing::error!(job_id = %job_id, "Failed to enqueue processing job");
        if let Err(e) = state.job_store.delete(job_id).await {
            tracing::error!(error = %e, "Failed to remove orphaned job record");
        }
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Processing queue unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        job_id = %job_id,
        source = %job.input.reference,
        input_type = job.input.kind.as_str(),
        "Processing job enqueued"
    );

    (
        StatusCode::CREATED,
        Json(CreatedResponse {
            job_id: job_id.to_string(),
            status: "created".to_string(),
            message: "Submitted for processing".to_string(),
        }),
    )
        .into_response()
}
