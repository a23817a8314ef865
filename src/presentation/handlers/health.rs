use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;

use crate::presentation::handlers::process_url::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_job_count: usize,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Response {
    match state.job_store.count_active().await {
        Ok(active_job_count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                active_job_count,
                timestamp: Utc::now().to_rfc3339(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed to read job store");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Job store unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}
