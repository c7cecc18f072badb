use super::traits::{CodecError, EncodedImage, ImageCodec, ImageMetadata};
use crate::domain::downsize::{bounded_dimensions, preview_blur_sigma, preview_dimensions};
use image::{DynamicImage, ImageFormat, ImageReader, imageops::FilterType};
use std::io::Cursor;

/// [`ImageCodec`] backed by the `image` crate.
///
/// The detected input format is reused for re-encoding, so a JPEG in yields
/// a JPEG out and so on for every enabled container.
pub struct ImageCrateCodec;

impl ImageCrateCodec {
    fn detect_format(data: &[u8]) -> Result<ImageFormat, CodecError> {
        image::guess_format(data).map_err(|e| CodecError::Decode(e.into()))
    }

    fn decode(data: &[u8], format: ImageFormat) -> Result<DynamicImage, CodecError> {
        image::load_from_memory_with_format(data, format).map_err(|e| CodecError::Decode(e.into()))
    }

    fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format)
            .map_err(|e| CodecError::Encode(e.into()))?;
        Ok(buf.into_inner())
    }
}

impl ImageCodec for ImageCrateCodec {
    fn probe(&self, data: &[u8]) -> Result<ImageMetadata, CodecError> {
        let format = Self::detect_format(data)?;
        let (width, height) = ImageReader::with_format(Cursor::new(data), format)
            .into_dimensions()
            .map_err(|e| CodecError::Decode(e.into()))?;
        Ok(ImageMetadata {
            width,
            height,
            mime_type: format.to_mime_type(),
        })
    }

    fn downsize(&self, data: &[u8], bound: u32) -> Result<Vec<u8>, CodecError> {
        let format = Self::detect_format(data)?;
        let img = Self::decode(data, format)?;

        match bounded_dimensions(img.width(), img.height(), bound) {
            // Already within the bound; skip the decode/encode round trip.
            None => Ok(data.to_vec()),
            Some((width, height)) => {
                let resized = img.resize_exact(width, height, FilterType::Lanczos3);
                Self::encode(&resized, format)
            }
        }
    }

    fn blurred_preview(&self, data: &[u8], reduce_factor: u32) -> Result<EncodedImage, CodecError> {
        let format = Self::detect_format(data)?;
        let img = Self::decode(data, format)?;

        let (width, height) = preview_dimensions(img.width(), img.height(), reduce_factor);
        let sigma = preview_blur_sigma(width, height);
        let preview = img.resize_exact(width, height, FilterType::Lanczos3).blur(sigma);

        Ok(EncodedImage {
            bytes: Self::encode(&preview, format)?,
            mime_type: format.to_mime_type(),
        })
    }
}
