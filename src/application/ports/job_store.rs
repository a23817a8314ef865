use async_trait::async_trait;

use crate::domain::{Job, JobId, JobUpdate};

/// Concurrent-safe keyed collection of job records.
///
/// All operations are atomic with respect to concurrent callers: an `update`
/// applies its whole merge under one lock acquisition, and `get` returns a
/// cloned snapshot rather than a live alias. Implementations must not perform
/// I/O while holding their internal lock.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), JobStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError>;

    async fn update(&self, id: JobId, update: JobUpdate) -> Result<(), JobStoreError>;

    async fn delete(&self, id: JobId) -> Result<(), JobStoreError>;

    /// Number of jobs that have not yet reached a terminal status.
    async fn count_active(&self) -> Result<usize, JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("job already exists: {0}")]
    Conflict(JobId),
}
