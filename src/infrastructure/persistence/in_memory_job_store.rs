use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId, JobUpdate};

/// Process-lifetime job storage behind a single async lock.
///
/// Reads hand out cloned snapshots; an update applies its whole merge inside
/// one write-lock section, so concurrent updates never interleave partial
/// field writes. No I/O happens while the lock is held.
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, job: &Job) -> Result<(), JobStoreError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(JobStoreError::Conflict(job.id));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn update(&self, id: JobId, update: JobUpdate) -> Result<(), JobStoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(&id).ok_or(JobStoreError::NotFound(id))?;

        // Terminal records are immutable; a late writer cannot corrupt them.
        if job.status.is_terminal() {
            tracing::warn!(job_id = %id, status = %job.status, "Ignoring update to terminal job");
            return Ok(());
        }

        if let Some(status) = update.status {
            job.status = status;
        }
        if let Some(progress) = update.progress {
            // Progress never decreases.
            job.progress = job.progress.max(progress);
        }
        if let Some(stage_label) = update.stage_label {
            job.stage_label = stage_label;
        }
        if let Some(message) = update.message {
            job.message = message;
        }
        if let Some(result) = update.result {
            job.result = Some(result);
        }
        if let Some(error) = update.error {
            job.error = Some(error);
        }
        if job.completed_at.is_none() {
            job.completed_at = update.completed_at;
        }
        Ok(())
    }

    async fn delete(&self, id: JobId) -> Result<(), JobStoreError> {
        let mut jobs = self.jobs.write().await;
        jobs.remove(&id)
            .map(|_| ())
            .ok_or(JobStoreError::NotFound(id))
    }

    async fn count_active(&self) -> Result<usize, JobStoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().filter(|j| !j.status.is_terminal()).count())
    }
}
