use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ArtifactRenderer, RenderError};
use crate::domain::{Analysis, Artifact, ArtifactSet, JobId, Transcript, VisualContent};

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Renders the combined stage outputs into three plain-text artifacts:
/// `transcript`, `summary` and `board_content`.
pub struct TextArtifactRenderer;

#[async_trait]
impl ArtifactRenderer for TextArtifactRenderer {
    async fn render(
        &self,
        job_id: JobId,
        transcript: &Transcript,
        analysis: &Analysis,
        visuals: &VisualContent,
    ) -> Result<ArtifactSet, RenderError> {
        let artifacts = vec![
            text_artifact("transcript", job_id, render_transcript(transcript)),
            text_artifact("summary", job_id, render_summary(analysis)),
            text_artifact("board_content", job_id, render_board_content(visuals)),
        ];
        Ok(ArtifactSet { artifacts })
    }
}

fn text_artifact(name: &str, job_id: JobId, body: String) -> Artifact {
    Artifact {
        name: name.to_string(),
        file_name: format!("{}_{}.txt", job_id, name),
        content_type: TEXT_CONTENT_TYPE.to_string(),
        data: Bytes::from(body),
    }
}

fn render_transcript(transcript: &Transcript) -> String {
    let mut lines = vec![
        "Lecture Transcript".to_string(),
        "==================".to_string(),
        format!(
            "Language: {}  Duration: {}  Confidence: {:.2}",
            transcript.language, transcript.duration, transcript.confidence
        ),
        String::new(),
    ];
    for segment in &transcript.segments {
        lines.push(format!("[{}] {}", segment.time_range(), segment.text));
    }
    lines.join("\n")
}

fn render_summary(analysis: &Analysis) -> String {
    let mut lines = vec![
        "Lecture Summary".to_string(),
        "===============".to_string(),
        String::new(),
        "Topics:".to_string(),
    ];
    for topic in &analysis.topics {
        lines.push(format!("  - {} ({})", topic.title, topic.time_range));
    }
    lines.push(String::new());
    lines.push("Methods:".to_string());
    for method in &analysis.methods {
        lines.push(format!("  - {}", method));
    }
    lines.push(String::new());
    lines.push("Examples:".to_string());
    for example in &analysis.examples {
        lines.push(format!("  - {}", example));
    }
    lines.push(String::new());
    lines.push(analysis.summary.clone());
    lines.join("\n")
}

fn render_board_content(visuals: &VisualContent) -> String {
    let mut lines = vec![
        "Board & Visual Content".to_string(),
        "======================".to_string(),
        String::new(),
    ];
    for fragment in &visuals.fragments {
        lines.push(format!("[{}] {}", fragment.kind.as_str(), fragment.text));
    }
    lines.join("\n")
}
