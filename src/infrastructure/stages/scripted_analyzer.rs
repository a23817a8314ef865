use async_trait::async_trait;

use crate::application::ports::{AnalysisError, Analyzer};
use crate::domain::{Analysis, ProcessingOptions, Topic, Transcript};

/// Deterministic stand-in for a real content-analysis backend.
///
/// Topics follow the transcript's segment boundaries; the example and method
/// lists are scripted demonstration content.
pub struct ScriptedAnalyzer;

#[async_trait]
impl Analyzer for ScriptedAnalyzer {
    async fn analyze(
        &self,
        transcript: &Transcript,
        _options: &ProcessingOptions,
    ) -> Result<Analysis, AnalysisError> {
        if transcript.text.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let topics: Vec<Topic> = transcript
            .segments
            .iter()
            .map(|segment| {
                let title = segment
                    .text
                    .split(&[':', '.'][..])
                    .next()
                    .unwrap_or(&segment.text)
                    .trim()
                    .to_string();
                Topic {
                    title,
                    time_range: segment.time_range(),
                }
            })
            .collect();

        let examples = vec![
            "Worked example from the technological domain".to_string(),
            "Worked example from the economic domain".to_string(),
            "Worked example from the social domain".to_string(),
            "Step-by-step derivation on the board".to_string(),
            "Counter-example discussed with the audience".to_string(),
            "Case study referenced from earlier material".to_string(),
            "Practice exercise assigned at the end".to_string(),
        ];

        let methods = vec![
            "Analytical approach based on decomposing the problem".to_string(),
            "Synthetic approach building a complete solution".to_string(),
            "Combined approach linking both directions".to_string(),
        ];

        let summary = topics
            .iter()
            .map(|t| format!("{} ({})", t.title, t.time_range))
            .collect::<Vec<_>>()
            .join("; ");

        Ok(Analysis {
            topics,
            examples,
            methods,
            summary: format!("The lecture covered: {}.", summary),
        })
    }
}
