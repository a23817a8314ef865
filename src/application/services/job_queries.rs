use std::sync::Arc;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Artifact, Job, JobId, JobStatus};

/// Read-only query surface over the job store.
///
/// Never mutates; safe to call concurrently with an in-flight pipeline run
/// because the store hands out consistent snapshots.
pub struct JobQueries {
    store: Arc<dyn JobStore>,
}

impl JobQueries {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    pub async fn status(&self, id: JobId) -> Result<Job, QueryError> {
        self.store
            .get(id)
            .await?
            .ok_or(QueryError::NotFound(id))
    }

    pub async fn artifact(&self, id: JobId, name: &str) -> Result<Artifact, ArtifactQueryError> {
        let job = self
            .store
            .get(id)
            .await?
            .ok_or(ArtifactQueryError::NotFound(id))?;

        if job.status != JobStatus::Completed {
            return Err(ArtifactQueryError::NotReady(job.status));
        }

        let Some(result) = job.result else {
            return Err(ArtifactQueryError::NotReady(job.status));
        };

        result
            .artifacts
            .get(name)
            .cloned()
            .ok_or_else(|| ArtifactQueryError::UnknownArtifact(name.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("store: {0}")]
    Store(#[from] JobStoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactQueryError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("job not completed yet: status is {0}")]
    NotReady(JobStatus),
    #[error("unknown artifact: {0}")]
    UnknownArtifact(String),
    #[error("store: {0}")]
    Store(#[from] JobStoreError),
}
