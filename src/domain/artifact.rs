use bytes::Bytes;

/// A named downloadable output produced by the rendering stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Stable name clients request downloads by, e.g. `transcript`.
    pub name: String,
    /// Suggested filename for the attachment disposition.
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    pub artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    pub fn file_names(&self) -> Vec<String> {
        self.artifacts.iter().map(|a| a.file_name.clone()).collect()
    }
}
