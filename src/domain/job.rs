use chrono::{DateTime, Utc};

use super::{InputDescriptor, JobId, JobStatus, ProcessingOptions, ProcessingResults};

/// The mutable state record tracking one submitted request.
///
/// Owned exclusively by the job store; callers only ever see clones. All
/// mutation flows through [`JobUpdate`] merges so concurrent writers cannot
/// interleave partial field writes.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    /// Percentage 0-100, non-decreasing while processing, 100 only on success.
    pub progress: u8,
    pub stage_label: String,
    pub message: String,
    pub input: InputDescriptor,
    pub options: ProcessingOptions,
    pub result: Option<ProcessingResults>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(input: InputDescriptor, options: ProcessingOptions) -> Self {
        Self {
            id: JobId::new(),
            status: JobStatus::Pending,
            progress: 0,
            stage_label: "Queued".to_string(),
            message: "Submitted for processing".to_string(),
            input,
            options,
            result: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

/// Partial update applied to a job record as one atomic merge.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub status: Option<JobStatus>,
    pub progress: Option<u8>,
    pub stage_label: Option<String>,
    pub message: Option<String>,
    pub result: Option<ProcessingResults>,
    pub error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl JobUpdate {
    /// Stage-boundary transition: checkpoint reached, new label and message.
    pub fn stage(progress: u8, stage_label: &str, message: &str) -> Self {
        Self {
            status: Some(JobStatus::Processing),
            progress: Some(progress),
            stage_label: Some(stage_label.to_string()),
            message: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn completed(result: ProcessingResults) -> Self {
        Self {
            status: Some(JobStatus::Completed),
            progress: Some(100),
            stage_label: Some("Completed".to_string()),
            message: Some("Processing completed successfully".to_string()),
            result: Some(result),
            completed_at: Some(Utc::now()),
            ..Self::default()
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            status: Some(JobStatus::Failed),
            stage_label: Some("Failed".to_string()),
            message: Some(format!("Processing failed: {}", error)),
            error: Some(error),
            completed_at: Some(Utc::now()),
            ..Self::default()
        }
    }
}
