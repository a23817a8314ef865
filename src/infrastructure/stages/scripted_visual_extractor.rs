use async_trait::async_trait;

use crate::application::ports::{VisualExtractionError, VisualExtractor};
use crate::domain::{SourceData, VisualContent, VisualFragment, VisualKind};

/// Deterministic stand-in for a real board/slide vision backend.
pub struct ScriptedVisualExtractor;

#[async_trait]
impl VisualExtractor for ScriptedVisualExtractor {
    async fn extract(&self, source: &SourceData) -> Result<VisualContent, VisualExtractionError> {
        if source.data.is_empty() {
            return Err(VisualExtractionError::DecodingFailed(format!(
                "no frames in {}",
                source.reference
            )));
        }

        let fragments = vec![
            VisualFragment {
                kind: VisualKind::Formula,
                text: "Mathematical formulas captured from the board".to_string(),
            },
            VisualFragment {
                kind: VisualKind::Diagram,
                text: "Diagrams and charts sketched during the session".to_string(),
            },
            VisualFragment {
                kind: VisualKind::Board,
                text: "Text written on the whiteboard".to_string(),
            },
            VisualFragment {
                kind: VisualKind::Slide,
                text: "Presentation slide content".to_string(),
            },
        ];

        Ok(VisualContent { fragments })
    }
}
