use serde::Serialize;

/// Output of the visual extraction stage: text recovered from boards, slides
/// and figures in the source material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualContent {
    pub fragments: Vec<VisualFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualFragment {
    pub kind: VisualKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualKind {
    Board,
    Diagram,
    Formula,
    Slide,
}

impl VisualKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualKind::Board => "board",
            VisualKind::Diagram => "diagram",
            VisualKind::Formula => "formula",
            VisualKind::Slide => "slide",
        }
    }
}
