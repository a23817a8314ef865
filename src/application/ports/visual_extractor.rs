use async_trait::async_trait;

use crate::domain::{SourceData, VisualContent};

/// Recovers board, diagram, formula and slide text from the original source.
#[async_trait]
pub trait VisualExtractor: Send + Sync {
    async fn extract(&self, source: &SourceData) -> Result<VisualContent, VisualExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VisualExtractionError {
    #[error("frame decoding failed: {0}")]
    DecodingFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
