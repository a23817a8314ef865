use bytes::Bytes;

/// Where a job's content came from, without the payload itself.
///
/// Uploaded bytes travel through the processing channel; the job record only
/// keeps this descriptor so status snapshots stay cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDescriptor {
    pub kind: InputKind,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Url,
    Upload,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Url => "url",
            InputKind::Upload => "file",
        }
    }
}

/// The submitted source, payload included.
#[derive(Debug, Clone)]
pub enum InputSource {
    Url { url: String },
    Upload { filename: String, data: Bytes },
}

impl InputSource {
    pub fn descriptor(&self) -> InputDescriptor {
        match self {
            InputSource::Url { url } => InputDescriptor {
                kind: InputKind::Url,
                reference: url.clone(),
            },
            InputSource::Upload { filename, .. } => InputDescriptor {
                kind: InputKind::Upload,
                reference: filename.clone(),
            },
        }
    }
}

/// A source resolved to raw bytes, ready for the stage workers.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub reference: String,
    pub data: Bytes,
}
