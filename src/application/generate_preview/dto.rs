/// A preview request that already passed URL validation.
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub url: String,
}

/// The generated placeholder image, ready to serve as-is.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub bytes: Vec<u8>,
    /// MIME type matching the original image's detected format.
    pub content_type: &'static str,
}
