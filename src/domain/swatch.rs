use serde::Serialize;
use std::collections::HashMap;

/// Hex color reported for a category the extractor produced no swatch for.
pub const DEFAULT_SWATCH_HEX: &str = "#ffffff";

/// The closed set of swatch categories a palette is reported under.
///
/// The variant order here is the order entries appear in the response; it is
/// fixed so output stays deterministic across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwatchCategory {
    Vibrant,
    Muted,
    DarkVibrant,
    DarkMuted,
    LightVibrant,
    LightMuted,
}

impl SwatchCategory {
    pub const ALL: [SwatchCategory; 6] = [
        SwatchCategory::Vibrant,
        SwatchCategory::Muted,
        SwatchCategory::DarkVibrant,
        SwatchCategory::DarkMuted,
        SwatchCategory::LightVibrant,
        SwatchCategory::LightMuted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SwatchCategory::Vibrant => "Vibrant",
            SwatchCategory::Muted => "Muted",
            SwatchCategory::DarkVibrant => "DarkVibrant",
            SwatchCategory::DarkMuted => "DarkMuted",
            SwatchCategory::LightVibrant => "LightVibrant",
            SwatchCategory::LightMuted => "LightMuted",
        }
    }
}

/// A representative color produced by the extraction capability, along with
/// an estimate of how many pixels support it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub hex: String,
    pub population: u32,
}

/// One row of the palette response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub key: &'static str,
    pub hex: String,
    pub population: u32,
}

/// Normalizes an extraction result into the full fixed-order entry list.
///
/// Every category in [`SwatchCategory::ALL`] yields exactly one entry;
/// categories the extractor had nothing for fall back to white with zero
/// population.
pub fn normalize_palette(swatches: &HashMap<SwatchCategory, Swatch>) -> Vec<PaletteEntry> {
    SwatchCategory::ALL
        .iter()
        .map(|category| match swatches.get(category) {
            Some(swatch) => PaletteEntry {
                key: category.as_str(),
                hex: swatch.hex.clone(),
                population: swatch.population,
            },
            None => PaletteEntry {
                key: category.as_str(),
                hex: DEFAULT_SWATCH_HEX.to_string(),
                population: 0,
            },
        })
        .collect()
}
