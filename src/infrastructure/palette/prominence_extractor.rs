use super::traits::{CategorySwatches, PaletteExtractor};
use crate::domain::swatch::{Swatch, SwatchCategory};
use anyhow::Context;
use async_trait::async_trait;
use prominence::PaletteBuilder;

/// [`PaletteExtractor`] backed by the `prominence` crate, a port of the
/// Android Palette quantizer. Its target set matches our category set one
/// to one, so adapting is a straight mapping of swatches.
pub struct ProminenceExtractor;

fn swatch_hex(rgb: (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

#[async_trait]
impl PaletteExtractor for ProminenceExtractor {
    async fn extract(&self, image_data: &[u8]) -> anyhow::Result<CategorySwatches> {
        // prominence bundles its own `image`; decode with that copy so the
        // pixel buffer type lines up.
        let img = prominence::image::load_from_memory(image_data)
            .context("failed to decode image for palette extraction")?;
        let palette = PaletteBuilder::from_image(img.to_rgb8()).generate();

        let targets = [
            (SwatchCategory::Vibrant, palette.vibrant_swatch()),
            (SwatchCategory::Muted, palette.muted_swatch()),
            (SwatchCategory::DarkVibrant, palette.dark_vibrant_swatch()),
            (SwatchCategory::DarkMuted, palette.dark_muted_swatch()),
            (SwatchCategory::LightVibrant, palette.light_vibrant_swatch()),
            (SwatchCategory::LightMuted, palette.light_muted_swatch()),
        ];

        let mut swatches = CategorySwatches::new();
        for (category, found) in targets {
            if let Some(swatch) = found {
                swatches.insert(
                    category,
                    Swatch {
                        hex: swatch_hex(swatch.rgb()),
                        population: swatch.population() as u32,
                    },
                );
            }
        }
        Ok(swatches)
    }
}
