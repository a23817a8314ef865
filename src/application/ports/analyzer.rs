use async_trait::async_trait;

use crate::domain::{Analysis, ProcessingOptions, Transcript};

/// Derives topics, examples, methods and a prose summary from a transcript.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        transcript: &Transcript,
        options: &ProcessingOptions,
    ) -> Result<Analysis, AnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("empty transcript")]
    EmptyTranscript,
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}
