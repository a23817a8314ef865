use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::time::timeout;

use crate::application::ports::{
    Analyzer, ArtifactRenderer, JobStore, SourceFetcher, Transcriber, VisualExtractor,
};
use crate::application::services::stage::{
    AnalysisStage, PipelineStage, RenderingStage, StageContext, StageError, TranscriptionStage,
    VisualExtractionStage,
};
use crate::domain::{
    InputSource, JobId, JobUpdate, ProcessingOptions, ProcessingResults, ProcessingSummary,
};

/// Progress checkpoint reached when source resolution begins.
pub const FETCH_CHECKPOINT: u8 = 10;

/// Drives one job through its ordered stages, mutating the job record at each
/// boundary and guaranteeing a terminal status no matter how a stage fails.
pub struct PipelineRunner {
    store: Arc<dyn JobStore>,
    fetcher: Arc<dyn SourceFetcher>,
    stages: Vec<Arc<dyn PipelineStage>>,
    stage_timeout: Duration,
}

impl PipelineRunner {
    pub fn new(
        store: Arc<dyn JobStore>,
        fetcher: Arc<dyn SourceFetcher>,
        stages: Vec<Arc<dyn PipelineStage>>,
        stage_timeout: Duration,
    ) -> Self {
        Self {
            store,
            fetcher,
            stages,
            stage_timeout,
        }
    }

    /// The standard four-stage pipeline in its required order.
    pub fn standard_stages(
        transcriber: Arc<dyn Transcriber>,
        analyzer: Arc<dyn Analyzer>,
        extractor: Arc<dyn VisualExtractor>,
        renderer: Arc<dyn ArtifactRenderer>,
    ) -> Vec<Arc<dyn PipelineStage>> {
        vec![
            Arc::new(TranscriptionStage::new(transcriber)),
            Arc::new(AnalysisStage::new(analyzer)),
            Arc::new(VisualExtractionStage::new(extractor)),
            Arc::new(RenderingStage::new(renderer)),
        ]
    }

    /// Runs the pipeline for `job_id` and records the outcome.
    ///
    /// A panic anywhere in the run is converted into a stage failure so the
    /// record can never be stranded in `processing`.
    pub async fn run(&self, job_id: JobId, input: InputSource, options: ProcessingOptions) {
        let outcome = AssertUnwindSafe(self.execute(job_id, input, options))
            .catch_unwind()
            .await;

        let update = match outcome {
            Ok(Ok(results)) => {
                tracing::info!("Processing completed");
                JobUpdate::completed(results)
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Processing failed");
                JobUpdate::failed(e.to_string())
            }
            Err(_) => {
                let e = StageError::panicked("pipeline");
                tracing::error!(error = %e, "Processing panicked");
                JobUpdate::failed(e.to_string())
            }
        };

        if let Err(e) = self.store.update(job_id, update).await {
            tracing::error!(error = %e, "Failed to record terminal job state");
        }
    }

    async fn execute(
        &self,
        job_id: JobId,
        input: InputSource,
        options: ProcessingOptions,
    ) -> Result<ProcessingResults, StageError> {
        self.transition(
            job_id,
            FETCH_CHECKPOINT,
            "Fetching source",
            "Retrieving source material",
        )
        .await?;

        let source = timeout(self.stage_timeout, self.fetcher.fetch(&input))
            .await
            .map_err(|_| StageError::timed_out("fetch", self.stage_timeout))?
            .map_err(|e| StageError::failed("fetch", e))?;

        let mut ctx = StageContext::new(job_id, input.descriptor(), options, source);

        for stage in &self.stages {
            self.transition(job_id, stage.checkpoint(), stage.label(), stage.message())
                .await?;
            tracing::debug!(stage = stage.name(), checkpoint = stage.checkpoint(), "Running stage");

            // No store lock is held here; the stage may block on external I/O.
            let output = timeout(self.stage_timeout, stage.execute(&ctx))
                .await
                .map_err(|_| StageError::timed_out(stage.name(), self.stage_timeout))??;

            ctx.apply(output);
        }

        assemble_results(&ctx)
    }

    async fn transition(
        &self,
        job_id: JobId,
        progress: u8,
        label: &str,
        message: &str,
    ) -> Result<(), StageError> {
        tracing::debug!(progress = progress, stage = label, "Job stage transition");
        self.store
            .update(job_id, JobUpdate::stage(progress, label, message))
            .await
            .map_err(|e| StageError::failed("store", e))
    }
}

fn assemble_results(ctx: &StageContext) -> Result<ProcessingResults, StageError> {
    let transcript = ctx
        .transcript
        .as_ref()
        .ok_or_else(|| StageError::failed("assembly", "transcript missing"))?;
    let analysis = ctx
        .analysis
        .as_ref()
        .ok_or_else(|| StageError::failed("assembly", "analysis missing"))?;
    let artifacts = ctx
        .artifacts
        .clone()
        .ok_or_else(|| StageError::failed("assembly", "artifacts missing"))?;

    let processing_summary = ProcessingSummary::new(
        &ctx.input,
        transcript,
        analysis.topics.len(),
        analysis.examples.len(),
        analysis.methods.len(),
    );

    Ok(ProcessingResults {
        generated_files: artifacts.file_names(),
        processing_summary,
        artifacts,
    })
}
