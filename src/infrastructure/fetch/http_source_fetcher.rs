use async_trait::async_trait;

use crate::application::ports::{FetchError, SourceFetcher};
use crate::domain::{InputSource, SourceData};

/// Resolves URL sources over HTTP; uploads pass their bytes straight through.
pub struct HttpSourceFetcher {
    client: reqwest::Client,
}

impl HttpSourceFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpSourceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    async fn fetch(&self, input: &InputSource) -> Result<SourceData, FetchError> {
        match input {
            InputSource::Upload { filename, data } => {
                if data.is_empty() {
                    return Err(FetchError::EmptySource(filename.clone()));
                }
                Ok(SourceData {
                    reference: filename.clone(),
                    data: data.clone(),
                })
            }
            InputSource::Url { url } => {
                let parsed = reqwest::Url::parse(url)
                    .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

                tracing::debug!(url = %parsed, "Downloading source");
                let response = self
                    .client
                    .get(parsed)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| FetchError::DownloadFailed(e.to_string()))?;

                let data = response
                    .bytes()
                    .await
                    .map_err(|e| FetchError::DownloadFailed(e.to_string()))?;

                if data.is_empty() {
                    return Err(FetchError::EmptySource(url.clone()));
                }
                Ok(SourceData {
                    reference: url.clone(),
                    data,
                })
            }
        }
    }
}
