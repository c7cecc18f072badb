use crate::{
    application::extract_palette::dto::PaletteRequest,
    domain::{
        errors::PipelineError,
        swatch::{PaletteEntry, normalize_palette},
    },
    infrastructure::{codec::traits::ImageCodec, fetcher::traits::ImageFetcher,
        palette::traits::PaletteExtractor},
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Orchestrates the palette pipeline: fetch the image, bound its longer
/// axis, run color quantization, and normalize the result into the fixed
/// category order.
///
/// The use case is stateless; every request runs the full pipeline on its
/// own buffers.
pub struct ExtractPaletteUseCase {
    fetcher: Arc<dyn ImageFetcher>,
    codec: Arc<dyn ImageCodec>,
    extractor: Arc<dyn PaletteExtractor>,
    max_dimension: u32,
}

impl ExtractPaletteUseCase {
    pub fn new(
        fetcher: Arc<dyn ImageFetcher>,
        codec: Arc<dyn ImageCodec>,
        extractor: Arc<dyn PaletteExtractor>,
        max_dimension: u32,
    ) -> Self {
        Self {
            fetcher,
            codec,
            extractor,
            max_dimension,
        }
    }

    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn execute(&self, request: PaletteRequest) -> Result<Vec<PaletteEntry>, PipelineError> {
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

        let downsized = self.codec.downsize(&data, self.max_dimension)?;

        let swatches = self
            .extractor
            .extract(&downsized)
            .await
            .map_err(PipelineError::Palette)?;
        debug!(swatches = swatches.len(), "extraction finished");

        Ok(normalize_palette(&swatches))
    }
}
