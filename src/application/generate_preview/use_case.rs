use crate::{
    application::generate_preview::dto::{PreviewImage, PreviewRequest},
    domain::errors::PipelineError,
    infrastructure::{codec::traits::ImageCodec, fetcher::traits::ImageFetcher},
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Produces the small blurred placeholder for an image URL: fetch, shrink
/// both axes by the reduction factor, blur, and re-encode in the format the
/// original arrived in.
pub struct GeneratePreviewUseCase {
    fetcher: Arc<dyn ImageFetcher>,
    codec: Arc<dyn ImageCodec>,
    reduce_factor: u32,
}

impl GeneratePreviewUseCase {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, codec: Arc<dyn ImageCodec>, reduce_factor: u32) -> Self {
        Self {
            fetcher,
            codec,
            reduce_factor,
        }
    }

    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn execute(&self, request: PreviewRequest) -> Result<PreviewImage, PipelineError> {
        let data = self
            .fetcher
            .fetch(&request.url)
            .await
            .map_err(PipelineError::Fetch)?;
        debug!(bytes = data.len(), "fetched image");

        let meta = self.codec.probe(&data)?;
        debug!(
            width = meta.width,
            height = meta.height,
            format = meta.mime_type,
            "decoded image metadata"
        );

        let preview = self.codec.blurred_preview(&data, self.reduce_factor)?;
        debug!(
            bytes = preview.bytes.len(),
            content_type = preview.mime_type,
            "preview encoded"
        );

        Ok(PreviewImage {
            bytes: preview.bytes,
            content_type: preview.mime_type,
        })
    }
}
