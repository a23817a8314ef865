use serde::{Deserialize, Serialize};

/// Caller-supplied processing configuration, immutable after submission.
///
/// Unrecognized keys are preserved verbatim so callers can round-trip their own
/// settings through the status endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
