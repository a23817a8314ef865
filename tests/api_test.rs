use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bytes::Bytes;
use tokio::sync::mpsc;
use tower::ServiceExt;

use lectern::application::ports::{FetchError, JobStore, SourceFetcher};
use lectern::application::services::{PipelineRunner, ProcessingWorker};
use lectern::domain::{InputSource, Job, JobUpdate, ProcessingOptions, SourceData};
use lectern::infrastructure::persistence::InMemoryJobStore;
use lectern::infrastructure::stages::{
    ScriptedAnalyzer, ScriptedTranscriber, ScriptedVisualExtractor, TextArtifactRenderer,
};
use lectern::presentation::{AppState, create_router};

const BOUNDARY: &str = "test-boundary-7db2";

/// Resolves any source without touching the network.
struct StubSourceFetcher;

#[async_trait]
impl SourceFetcher for StubSourceFetcher {
    async fn fetch(&self, input: &InputSource) -> Result<SourceData, FetchError> {
        let reference = input.descriptor().reference;
        match input {
            InputSource::Upload { data, .. } => Ok(SourceData {
                reference,
                data: data.clone(),
            }),
            InputSource::Url { .. } => Ok(SourceData {
                reference,
                data: Bytes::from_static(b"stub source bytes"),
            }),
        }
    }
}

struct TestApp {
    router: Router,
    store: Arc<InMemoryJobStore>,
}

fn create_test_app() -> TestApp {
    let store = Arc::new(InMemoryJobStore::new());
    let job_store: Arc<dyn JobStore> = store.clone();

    let stages = PipelineRunner::standard_stages(
        Arc::new(ScriptedTranscriber),
        Arc::new(ScriptedAnalyzer),
        Arc::new(ScriptedVisualExtractor),
        Arc::new(TextArtifactRenderer),
    );
    let runner = Arc::new(PipelineRunner::new(
        Arc::clone(&job_store),
        Arc::new(StubSourceFetcher),
        stages,
        Duration::from_secs(5),
    ));

    let (sender, receiver) = mpsc::channel(8);
    tokio::spawn(ProcessingWorker::new(receiver, runner).run());

    let router = create_router(AppState::new(job_store, sender));
    TestApp { router, store }
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn multipart_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn file_part(filename: &str, content: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: audio/mpeg\r\n\r\n{content}\r\n"
    )
}

fn options_part(options_json: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"options\"\r\n\r\n{options_json}\r\n"
    )
}

fn close_multipart(mut body: String) -> String {
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

async fn poll_until_terminal(app: &Router, job_id: &str) -> serde_json::Value {
    for _ in 0..500 {
        let (status, json) = get_json(app, &format!("/status/{}", job_id)).await;
        assert_eq!(status, StatusCode::OK);
        let state = json["status"].as_str().unwrap().to_string();
        if state == "completed" || state == "failed" {
            return json;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job {} never reached a terminal status", job_id);
}

#[tokio::test]
async fn given_running_server_when_health_check_then_reports_active_jobs() {
    let app = create_test_app();

    let (status, json) = get_json(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["active_job_count"], 0);
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn given_root_request_when_service_info_then_lists_endpoints() {
    let app = create_test_app();

    let (status, json) = get_json(&app.router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "online");
    assert!(json["endpoints"].as_array().unwrap().len() >= 5);
}

#[tokio::test]
async fn given_valid_url_when_submitted_then_job_is_created_and_resolvable() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "created");
    let job_id = json["job_id"].as_str().unwrap();

    let (status, json) = get_json(&app.router, &format!("/status/{}", job_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["job_id"], job_id);
    let state = json["status"].as_str().unwrap();
    assert!(
        ["pending", "processing", "completed"].contains(&state),
        "unexpected status {state}"
    );
}

#[tokio::test]
async fn given_url_submission_when_pipeline_finishes_then_three_artifacts_are_reported() {
    let app = create_test_app();

    let (_, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;
    let job_id = json["job_id"].as_str().unwrap().to_string();

    let terminal = poll_until_terminal(&app.router, &job_id).await;

    assert_eq!(terminal["status"], "completed");
    assert_eq!(terminal["progress"], 100);
    assert!(terminal["completed_at"].as_str().is_some());
    assert!(terminal.get("error").is_none());
    let files = terminal["results"]["generated_files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    let summary = &terminal["results"]["processing_summary"];
    assert_eq!(summary["input_type"], "url");
    assert_eq!(summary["source"], "https://example.com/lecture.mp4");
    assert_eq!(summary["subjects_found"], 4);
    assert_eq!(summary["examples_extracted"], 7);
    assert_eq!(summary["methods_identified"], 3);
}

#[tokio::test]
async fn given_progress_reads_while_processing_then_progress_never_decreases() {
    let app = create_test_app();

    let (_, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;
    let job_id = json["job_id"].as_str().unwrap().to_string();

    let mut last = 0u64;
    for _ in 0..500 {
        let (_, json) = get_json(&app.router, &format!("/status/{}", job_id)).await;
        let progress = json["progress"].as_u64().unwrap();
        assert!(progress >= last, "progress regressed: {last} -> {progress}");
        last = progress;
        if json["status"] == "completed" || json["status"] == "failed" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(last, 100);
}

#[tokio::test]
async fn given_missing_source_url_when_submitted_then_bad_request_and_no_job() {
    let app = create_test_app();

    let (status, json) = post_json(&app.router, "/process/url", r#"{"options": {}}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("source_url"));
    assert_eq!(app.store.count_active().await.unwrap(), 0);
}

#[tokio::test]
async fn given_blank_source_url_when_submitted_then_bad_request() {
    let app = create_test_app();

    let (status, _) = post_json(&app.router, "/process/url", r#"{"source_url": "  "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_file_upload_when_pipeline_finishes_then_job_completes() {
    let app = create_test_app();

    let body = close_multipart(file_part("lecture.mp3", "fake audio payload"));
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/process/upload", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let job_id = json["job_id"].as_str().unwrap().to_string();

    let terminal = poll_until_terminal(&app.router, &job_id).await;
    assert_eq!(terminal["status"], "completed");
    assert_eq!(terminal["results"]["processing_summary"]["input_type"], "file");
    assert_eq!(terminal["results"]["processing_summary"]["source"], "lecture.mp3");
}

#[tokio::test]
async fn given_upload_options_when_submitted_then_options_are_echoed_in_status() {
    let app = create_test_app();

    let mut body = file_part("lecture.mp3", "fake audio payload");
    body.push_str(&options_part(r#"{"language": "en", "notes": "keep"}"#));
    let body = close_multipart(body);

    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/process/upload", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let job_id = json["job_id"].as_str().unwrap().to_string();

    let terminal = poll_until_terminal(&app.router, &job_id).await;
    assert_eq!(terminal["options"]["language"], "en");
    assert_eq!(terminal["options"]["notes"], "keep");
    assert_eq!(terminal["results"]["processing_summary"]["language"], "en");
}

#[tokio::test]
async fn given_upload_without_file_field_when_submitted_then_bad_request_and_no_job() {
    let app = create_test_app();

    let body = close_multipart(options_part(r#"{"language": "en"}"#));
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/process/upload", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count_active().await.unwrap(), 0);
}

#[tokio::test]
async fn given_upload_with_empty_filename_when_submitted_then_bad_request_and_no_job() {
    let app = create_test_app();

    let body = close_multipart(file_part("", "payload"));
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/process/upload", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count_active().await.unwrap(), 0);
}

#[tokio::test]
async fn given_unknown_job_id_when_status_requested_then_not_found() {
    let app = create_test_app();

    let (status, _) = get_json(
        &app.router,
        "/status/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_malformed_job_id_when_status_requested_then_bad_request() {
    let app = create_test_app();

    let (status, _) = get_json(&app.router, "/status/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_unknown_job_id_when_download_requested_then_not_found() {
    let app = create_test_app();

    let (status, _) = get_json(
        &app.router,
        "/download/00000000-0000-0000-0000-000000000000/transcript",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_job_still_processing_when_download_requested_then_bad_request() {
    let app = create_test_app();

    let job = Job::new(
        InputSource::Url {
            url: "https://example.com/lecture.mp4".to_string(),
        }
        .descriptor(),
        ProcessingOptions::default(),
    );
    let job_id = job.id;
    app.store.create(&job).await.unwrap();
    app.store
        .update(job_id, JobUpdate::stage(25, "Transcribing audio", "working"))
        .await
        .unwrap();

    let (status, json) = get_json(&app.router, &format!("/download/{}/transcript", job_id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("not completed"));
}

#[tokio::test]
async fn given_completed_job_when_unknown_artifact_requested_then_bad_request() {
    let app = create_test_app();

    let (_, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;
    let job_id = json["job_id"].as_str().unwrap().to_string();
    poll_until_terminal(&app.router, &job_id).await;

    let (status, json) = get_json(&app.router, &format!("/download/{}/nonexistent", job_id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Unknown artifact"));
}

#[tokio::test]
async fn given_completed_job_when_artifact_downloaded_then_attachment_is_served() {
    let app = create_test_app();

    let (_, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;
    let job_id = json["job_id"].as_str().unwrap().to_string();
    poll_until_terminal(&app.router, &job_id).await;

    for name in ["transcript", "summary", "board_content"] {
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/download/{}/{}", job_id, name))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains(name));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!bytes.is_empty());
    }
}

#[tokio::test]
async fn given_terminal_job_when_status_read_twice_then_snapshots_are_identical() {
    let app = create_test_app();

    let (_, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;
    let job_id = json["job_id"].as_str().unwrap().to_string();
    poll_until_terminal(&app.router, &job_id).await;

    let (_, first) = get_json(&app.router, &format!("/status/{}", job_id)).await;
    let (_, second) = get_json(&app.router, &format!("/status/{}", job_id)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_existing_job_when_deleted_then_status_returns_not_found() {
    let app = create_test_app();

    let (_, json) = post_json(
        &app.router,
        "/process/url",
        r#"{"source_url": "https://example.com/lecture.mp4"}"#,
    )
    .await;
    let job_id = json["job_id"].as_str().unwrap().to_string();
    poll_until_terminal(&app.router, &job_id).await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/jobs/{}", job_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = get_json(&app.router, &format!("/status/{}", job_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_unknown_job_when_deleted_then_not_found() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/jobs/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
