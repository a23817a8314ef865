use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_job_handler, download_handler, health_handler, job_status_handler,
    process_upload_handler, process_url_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_handler))
        .route("/process/url", post(process_url_handler))
        .route("/process/upload", post(process_upload_handler))
        .route("/status/{job_id}", get(job_status_handler))
        .route("/download/{job_id}/{artifact_name}", get(download_handler))
        .route("/jobs/{job_id}", delete(delete_job_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": "Lecture Processing Backend",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/health - System health check",
            "/process/url - Process a source URL",
            "/process/upload - Process an uploaded file",
            "/status/{job_id} - Get job status",
            "/download/{job_id}/{artifact_name} - Download a generated artifact",
        ],
    }))
}
