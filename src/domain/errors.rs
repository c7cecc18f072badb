use thiserror::Error;

/// Failures along the fetch -> decode -> transform pipeline.
///
/// Each stage keeps its source error for logging; the HTTP layer decides
/// which stage maps to which status and client-visible message.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("image fetch failed")]
    Fetch(#[source] anyhow::Error),

    #[error("image decode failed")]
    Decode(#[source] anyhow::Error),

    #[error("palette extraction failed")]
    Palette(#[source] anyhow::Error),

    #[error("image encode failed")]
    Encode(#[source] anyhow::Error),
}
