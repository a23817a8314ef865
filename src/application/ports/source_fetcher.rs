use async_trait::async_trait;

use crate::domain::{InputSource, SourceData};

/// Resolves a submitted source into raw bytes before the stage loop runs.
///
/// Uploads already carry their payload; URL sources require an outbound fetch.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, input: &InputSource) -> Result<SourceData, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid source url: {0}")]
    InvalidUrl(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("empty source: {0}")]
    EmptySource(String),
}
