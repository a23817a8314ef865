use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use lectern::application::ports::JobStore;
use lectern::application::services::{PipelineRunner, ProcessingWorker};
use lectern::infrastructure::fetch::HttpSourceFetcher;
use lectern::infrastructure::observability::{TracingConfig, init_tracing};
use lectern::infrastructure::persistence::InMemoryJobStore;
use lectern::infrastructure::stages::{
    ScriptedAnalyzer, ScriptedTranscriber, ScriptedVisualExtractor, TextArtifactRenderer,
};
use lectern::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let tracing_config = TracingConfig {
        json_format: settings.logging.json_format,
        ..TracingConfig::default()
    };
    init_tracing(tracing_config, settings.server.port);

    let job_store: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::new());

    let stages = PipelineRunner::standard_stages(
        Arc::new(ScriptedTranscriber),
        Arc::new(ScriptedAnalyzer),
        Arc::new(ScriptedVisualExtractor),
        Arc::new(TextArtifactRenderer),
    );
    let runner = Arc::new(PipelineRunner::new(
        Arc::clone(&job_store),
        Arc::new(HttpSourceFetcher::new()),
        stages,
        Duration::from_secs(settings.pipeline.stage_timeout_secs),
    ));

    let (sender, receiver) = mpsc::channel(settings.pipeline.queue_capacity);
    tokio::spawn(ProcessingWorker::new(receiver, runner).run());

    let state = AppState::new(job_store, sender);
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
