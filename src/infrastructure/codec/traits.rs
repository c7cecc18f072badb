use crate::domain::errors::PipelineError;
use thiserror::Error;

/// Metadata read from an encoded image without transforming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// MIME type of the detected container, e.g. `image/png`.
    pub mime_type: &'static str,
}

/// A transformed image re-encoded in its original container format.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unrecognized or corrupt image data")]
    Decode(#[source] anyhow::Error),

    #[error("failed to re-encode image")]
    Encode(#[source] anyhow::Error),
}

impl From<CodecError> for PipelineError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Decode(source) => PipelineError::Decode(source),
            CodecError::Encode(source) => PipelineError::Encode(source),
        }
    }
}

/// Image decode/transform/encode capability.
///
/// Operations are CPU-bound and synchronous; concurrency across requests is
/// the runtime's concern, one request's steps are strictly sequential.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCodec: Send + Sync {
    /// Decode metadata (dimensions plus detected format).
    fn probe(&self, data: &[u8]) -> Result<ImageMetadata, CodecError>;

    /// Bound the longer axis to `bound` pixels, preserving aspect ratio.
    /// Images already within the bound are returned unchanged.
    fn downsize(&self, data: &[u8], bound: u32) -> Result<Vec<u8>, CodecError>;

    /// Produce the blurred low-resolution preview: both axes divided by
    /// `reduce_factor`, blurred, re-encoded in the detected input format.
    fn blurred_preview(&self, data: &[u8], reduce_factor: u32) -> Result<EncodedImage, CodecError>;
}
