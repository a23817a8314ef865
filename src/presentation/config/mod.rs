mod settings;

pub use settings::{LoggingSettings, PipelineSettings, ServerSettings, Settings};
