use async_trait::async_trait;

use crate::domain::{Analysis, ArtifactSet, JobId, Transcript, VisualContent};

/// Renders the union of stage outputs into named downloadable artifacts.
#[async_trait]
pub trait ArtifactRenderer: Send + Sync {
    async fn render(
        &self,
        job_id: JobId,
        transcript: &Transcript,
        analysis: &Analysis,
        visuals: &VisualContent,
    ) -> Result<ArtifactSet, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("rendering failed: {0}")]
    RenderFailed(String),
}
