use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::services::PipelineRunner;
use crate::domain::{InputSource, JobId, ProcessingOptions};

/// Unit of work enqueued at submission time.
pub struct ProcessingMessage {
    pub job_id: JobId,
    pub input: InputSource,
    pub options: ProcessingOptions,
}

/// Channel-driven worker decoupling pipeline duration from request latency.
///
/// Each received job is spawned onto its own task, so independent jobs run
/// concurrently while the stages within one job stay strictly sequential.
pub struct ProcessingWorker {
    receiver: mpsc::Receiver<ProcessingMessage>,
    runner: Arc<PipelineRunner>,
}

impl ProcessingWorker {
    pub fn new(receiver: mpsc::Receiver<ProcessingMessage>, runner: Arc<PipelineRunner>) -> Self {
        Self { receiver, runner }
    }

    pub async fn run(mut self) {
        tracing::info!("Processing worker started");
        while let Some(msg) = self.receiver.recv().await {
            let runner = Arc::clone(&self.runner);
            let span = tracing::info_span!(
                "processing_job",
                job_id = %msg.job_id,
                source = %msg.input.descriptor().reference,
            );
            tokio::spawn(
                async move {
                    runner.run(msg.job_id, msg.input, msg.options).await;
                }
                .instrument(span),
            );
        }
        tracing::info!("Processing worker stopped: channel closed");
    }
}
