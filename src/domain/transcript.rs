use serde::Serialize;

/// Output of the transcription stage: full text plus per-segment timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
    pub language: String,
    /// Detected duration, rendered as `mm:ss`.
    pub duration: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub start_secs: u32,
    pub end_secs: u32,
    pub text: String,
}

impl TranscriptSegment {
    pub fn time_range(&self) -> String {
        format!(
            "{:02}:{:02}-{:02}:{:02}",
            self.start_secs / 60,
            self.start_secs % 60,
            self.end_secs / 60,
            self.end_secs % 60
        )
    }
}
