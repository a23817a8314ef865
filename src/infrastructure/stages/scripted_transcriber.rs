use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::{ProcessingOptions, SourceData, Transcript, TranscriptSegment};

const DEFAULT_LANGUAGE: &str = "he";

/// Deterministic stand-in for a real speech-to-text backend.
///
/// Produces a fixed four-section lecture transcript so the rest of the
/// pipeline can be exercised without any model or API dependency. Swap a real
/// `Transcriber` in at wiring time to change that.
pub struct ScriptedTranscriber;

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    async fn transcribe(
        &self,
        source: &SourceData,
        options: &ProcessingOptions,
    ) -> Result<Transcript, TranscriptionError> {
        if source.data.is_empty() {
            return Err(TranscriptionError::DecodingFailed(format!(
                "no audio data in {}",
                source.reference
            )));
        }

        let language = options
            .language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let segments = vec![
            TranscriptSegment {
                start_secs: 0,
                end_secs: 330,
                text: "Introduction to the topic: basic definitions and first examples."
                    .to_string(),
            },
            TranscriptSegment {
                start_secs: 330,
                end_secs: 920,
                text: "Developing the idea: working methods, advanced techniques and practical examples."
                    .to_string(),
            },
            TranscriptSegment {
                start_secs: 920,
                end_secs: 1725,
                text: "Advanced applications: solving complex problems with innovative approaches."
                    .to_string(),
            },
            TranscriptSegment {
                start_secs: 1725,
                end_secs: 2100,
                text: "Summary and conclusions: key points, recommendations and questions."
                    .to_string(),
            },
        ];

        let text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Transcript {
            text,
            segments,
            language,
            duration: "35:24".to_string(),
            confidence: 0.92,
        })
    }
}
