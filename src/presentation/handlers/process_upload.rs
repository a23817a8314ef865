use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::domain::{InputSource, ProcessingOptions};
use crate::presentation::handlers::process_url::{ErrorResponse, submit};
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, multipart))]
pub async fn process_upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut upload: Option<(String, Bytes)> = None;
    let mut options = ProcessingOptions::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("").trim().to_string();
                if filename.is_empty() {
                    tracing::warn!("Upload with empty filename");
                    return bad_request("No file selected".to_string());
                }
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return bad_request(format!("Failed to read file: {}", e));
                    }
                };
                tracing::debug!(filename = %filename, bytes = data.len(), "File data received");
                upload = Some((filename, data));
            }
            Some("options") => {
                // Malformed options fall back to defaults rather than failing
                // the whole submission.
                if let Ok(raw) = field.text().await {
                    options = serde_json::from_str(&raw).unwrap_or_default();
                }
            }
            _ => {}
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Upload request with no file field");
        return bad_request("No file uploaded".to_string());
    };

    if data.is_empty() {
        tracing::warn!(filename = %filename, "Upload with empty file");
        return bad_request("Uploaded file is empty".to_string());
    }

    submit(&state, InputSource::Upload { filename, data }, options).await
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}
