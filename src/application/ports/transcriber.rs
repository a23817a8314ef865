use async_trait::async_trait;

use crate::domain::{ProcessingOptions, SourceData, Transcript};

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(
        &self,
        source: &SourceData,
        options: &ProcessingOptions,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("unsupported source format: {0}")]
    UnsupportedFormat(String),
}
