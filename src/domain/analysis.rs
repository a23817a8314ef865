use serde::Serialize;

/// Output of the content analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub topics: Vec<Topic>,
    pub examples: Vec<String>,
    pub methods: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub title: String,
    /// `mm:ss-mm:ss` span within the source recording.
    pub time_range: String,
}
