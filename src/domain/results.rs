use serde::Serialize;

use super::{ArtifactSet, InputDescriptor, Transcript};

/// The combined success aggregate, assembled once every stage has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResults {
    pub generated_files: Vec<String>,
    pub processing_summary: ProcessingSummary,
    pub artifacts: ArtifactSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingSummary {
    pub input_type: String,
    pub source: String,
    pub duration_detected: String,
    pub language: String,
    pub confidence: f32,
    pub subjects_found: usize,
    pub examples_extracted: usize,
    pub methods_identified: usize,
}

impl ProcessingSummary {
    pub fn new(
        input: &InputDescriptor,
        transcript: &Transcript,
        subjects_found: usize,
        examples_extracted: usize,
        methods_identified: usize,
    ) -> Self {
        Self {
            input_type: input.kind.as_str().to_string(),
            source: input.reference.clone(),
            duration_detected: transcript.duration.clone(),
            language: transcript.language.clone(),
            confidence: transcript.confidence,
            subjects_found,
            examples_extracted,
            methods_identified,
        }
    }
}
