use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Analyzer, ArtifactRenderer, Transcriber, VisualExtractor};
use crate::domain::{
    Analysis, ArtifactSet, InputDescriptor, JobId, ProcessingOptions, SourceData, Transcript,
    VisualContent,
};

/// Accumulated pipeline state: the original input plus every prior stage output.
#[derive(Debug, Clone)]
pub struct StageContext {
    pub job_id: JobId,
    pub input: InputDescriptor,
    pub options: ProcessingOptions,
    pub source: SourceData,
    pub transcript: Option<Transcript>,
    pub analysis: Option<Analysis>,
    pub visuals: Option<VisualContent>,
    pub artifacts: Option<ArtifactSet>,
}

impl StageContext {
    pub fn new(
        job_id: JobId,
        input: InputDescriptor,
        options: ProcessingOptions,
        source: SourceData,
    ) -> Self {
        Self {
            job_id,
            input,
            options,
            source,
            transcript: None,
            analysis: None,
            visuals: None,
            artifacts: None,
        }
    }

    pub fn apply(&mut self, output: StageOutput) {
        match output {
            StageOutput::Transcript(t) => self.transcript = Some(t),
            StageOutput::Analysis(a) => self.analysis = Some(a),
            StageOutput::Visuals(v) => self.visuals = Some(v),
            StageOutput::Artifacts(a) => self.artifacts = Some(a),
        }
    }
}

#[derive(Debug, Clone)]
pub enum StageOutput {
    Transcript(Transcript),
    Analysis(Analysis),
    Visuals(VisualContent),
    Artifacts(ArtifactSet),
}

/// One ordered step of the pipeline.
///
/// A stage either returns a fully-populated output or fails; the orchestrator
/// advances the job record to `checkpoint` before invoking `execute`.
#[async_trait]
pub trait PipelineStage: Send + Sync {
    fn name(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn message(&self) -> &'static str;
    fn checkpoint(&self) -> u8;

    async fn execute(&self, ctx: &StageContext) -> Result<StageOutput, StageError>;
}

#[derive(Debug)]
pub struct StageError {
    pub stage: String,
    pub kind: StageErrorKind,
}

#[derive(Debug)]
pub enum StageErrorKind {
    Failed(String),
    TimedOut(Duration),
    Panicked,
}

impl StageError {
    pub fn failed(stage: &str, cause: impl fmt::Display) -> Self {
        Self {
            stage: stage.to_string(),
            kind: StageErrorKind::Failed(cause.to_string()),
        }
    }

    pub fn timed_out(stage: &str, after: Duration) -> Self {
        Self {
            stage: stage.to_string(),
            kind: StageErrorKind::TimedOut(after),
        }
    }

    pub fn panicked(stage: &str) -> Self {
        Self {
            stage: stage.to_string(),
            kind: StageErrorKind::Panicked,
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StageErrorKind::Failed(cause) => write!(f, "{}: {}", self.stage, cause),
            StageErrorKind::TimedOut(after) => {
                write!(f, "{}: timed out after {}s", self.stage, after.as_secs())
            }
            StageErrorKind::Panicked => write!(f, "{}: panicked", self.stage),
        }
    }
}

impl std::error::Error for StageError {}

pub struct TranscriptionStage {
    transcriber: Arc<dyn Transcriber>,
}

impl TranscriptionStage {
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self { transcriber }
    }
}

#[async_trait]
impl PipelineStage for TranscriptionStage {
    fn name(&self) -> &'static str {
        "transcription"
    }

    fn label(&self) -> &'static str {
        "Transcribing audio"
    }

    fn message(&self) -> &'static str {
        "Transcribing the lecture content"
    }

    fn checkpoint(&self) -> u8 {
        25
    }

    async fn execute(&self, ctx: &StageContext) -> Result<StageOutput, StageError> {
        let transcript = self
            .transcriber
            .transcribe(&ctx.source, &ctx.options)
            .await
            .map_err(|e| StageError::failed(self.name(), e))?;
        Ok(StageOutput::Transcript(transcript))
    }
}

pub struct AnalysisStage {
    analyzer: Arc<dyn Analyzer>,
}

impl AnalysisStage {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl PipelineStage for AnalysisStage {
    fn name(&self) -> &'static str {
        "analysis"
    }

    fn label(&self) -> &'static str {
        "Analyzing content"
    }

    fn message(&self) -> &'static str {
        "Identifying topics, examples and methods"
    }

    fn checkpoint(&self) -> u8 {
        50
    }

    async fn execute(&self, ctx: &StageContext) -> Result<StageOutput, StageError> {
        let transcript = ctx
            .transcript
            .as_ref()
            .ok_or_else(|| StageError::failed(self.name(), "transcript not available"))?;
        let analysis = self
            .analyzer
            .analyze(transcript, &ctx.options)
            .await
            .map_err(|e| StageError::failed(self.name(), e))?;
        Ok(StageOutput::Analysis(analysis))
    }
}

pub struct VisualExtractionStage {
    extractor: Arc<dyn VisualExtractor>,
}

impl VisualExtractionStage {
    pub fn new(extractor: Arc<dyn VisualExtractor>) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl PipelineStage for VisualExtractionStage {
    fn name(&self) -> &'static str {
        "visual_extraction"
    }

    fn label(&self) -> &'static str {
        "Extracting visual content"
    }

    fn message(&self) -> &'static str {
        "Collecting board, diagram and slide text"
    }

    fn checkpoint(&self) -> u8 {
        75
    }

    async fn execute(&self, ctx: &StageContext) -> Result<StageOutput, StageError> {
        let visuals = self
            .extractor
            .extract(&ctx.source)
            .await
            .map_err(|e| StageError::failed(self.name(), e))?;
        Ok(StageOutput::Visuals(visuals))
    }
}

pub struct RenderingStage {
    renderer: Arc<dyn ArtifactRenderer>,
}

impl RenderingStage {
    pub fn new(renderer: Arc<dyn ArtifactRenderer>) -> Self {
        Self { renderer }
    }
}

#[async_trait]
impl PipelineStage for RenderingStage {
    fn name(&self) -> &'static str {
        "rendering"
    }

    fn label(&self) -> &'static str {
        "Generating artifacts"
    }

    fn message(&self) -> &'static str {
        "Preparing downloadable files"
    }

    fn checkpoint(&self) -> u8 {
        95
    }

    async fn execute(&self, ctx: &StageContext) -> Result<StageOutput, StageError> {
        let transcript = ctx
            .transcript
            .as_ref()
            .ok_or_else(|| StageError::failed(self.name(), "transcript not available"))?;
        let analysis = ctx
            .analysis
            .as_ref()
            .ok_or_else(|| StageError::failed(self.name(), "analysis not available"))?;
        let visuals = ctx
            .visuals
            .as_ref()
            .ok_or_else(|| StageError::failed(self.name(), "visual content not available"))?;
        let artifacts = self
            .renderer
            .render(ctx.job_id, transcript, analysis, visuals)
            .await
            .map_err(|e| StageError::failed(self.name(), e))?;
        Ok(StageOutput::Artifacts(artifacts))
    }
}
