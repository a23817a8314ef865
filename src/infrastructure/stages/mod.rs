mod scripted_analyzer;
mod scripted_transcriber;
mod scripted_visual_extractor;
mod text_renderer;

pub use scripted_analyzer::ScriptedAnalyzer;
pub use scripted_transcriber::ScriptedTranscriber;
pub use scripted_visual_extractor::ScriptedVisualExtractor;
pub use text_renderer::TextArtifactRenderer;
