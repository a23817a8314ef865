mod job_queries;
mod pipeline_runner;
mod processing_worker;
mod stage;

pub use job_queries::{ArtifactQueryError, JobQueries, QueryError};
pub use pipeline_runner::{FETCH_CHECKPOINT, PipelineRunner};
pub use processing_worker::{ProcessingMessage, ProcessingWorker};
pub use stage::{
    AnalysisStage, PipelineStage, RenderingStage, StageContext, StageError, StageErrorKind,
    StageOutput, TranscriptionStage, VisualExtractionStage,
};
