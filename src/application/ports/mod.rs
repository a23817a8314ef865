mod analyzer;
mod artifact_renderer;
mod job_store;
mod source_fetcher;
mod transcriber;
mod visual_extractor;

pub use analyzer::{AnalysisError, Analyzer};
pub use artifact_renderer::{ArtifactRenderer, RenderError};
pub use job_store::{JobStore, JobStoreError};
pub use source_fetcher::{FetchError, SourceFetcher};
pub use transcriber::{Transcriber, TranscriptionError};
pub use visual_extractor::{VisualExtractionError, VisualExtractor};
