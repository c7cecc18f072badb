use crate::domain::swatch::{Swatch, SwatchCategory};
use async_trait::async_trait;
use std::collections::HashMap;

/// Category-to-swatch mapping produced by an extraction pass. Categories the
/// quantizer found no suitable color for are simply absent.
pub type CategorySwatches = HashMap<SwatchCategory, Swatch>;

/// Color-quantization capability: turns encoded image bytes into the fixed
/// category mapping. Normalization of missing categories happens in the
/// domain, not here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaletteExtractor: Send + Sync {
    async fn extract(&self, image_data: &[u8]) -> anyhow::Result<CategorySwatches>;
}
