mod analysis;
mod artifact;
mod job;
mod job_id;
mod job_status;
mod options;
mod results;
mod source;
mod transcript;
mod visual;

pub use analysis::{Analysis, Topic};
pub use artifact::{Artifact, ArtifactSet};
pub use job::{Job, JobUpdate};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use options::ProcessingOptions;
pub use results::{ProcessingResults, ProcessingSummary};
pub use source::{InputDescriptor, InputKind, InputSource, SourceData};
pub use transcript::{Transcript, TranscriptSegment};
pub use visual::{VisualContent, VisualFragment, VisualKind};
