use std::path::PathBuf;

/// Terminal pipeline failures. Every variant aborts the current run; the
/// caller must re-trigger the whole pipeline from scratch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("failed to extract any article content from {url}")]
    ExtractionEmpty { url: String },

    #[error("{stage} call failed: {source}")]
    UpstreamCall {
        stage: Stage,
        source: anyhow::Error,
    },

    /// The audio was synthesized and written, but the saved file could not
    /// be read back for playback. `bytes` still holds the synthesized audio
    /// so the caller can offer a download regardless.
    #[error("podcast saved to {} but could not be read back for playback: {source}", path.display())]
    DeliveryRead {
        path: PathBuf,
        bytes: Vec<u8>,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which outbound service call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extraction,
    Summarization,
    Synthesis,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Extraction => write!(f, "extraction"),
            Stage::Summarization => write!(f, "summarization"),
            Stage::Synthesis => write!(f, "speech synthesis"),
        }
    }
}
