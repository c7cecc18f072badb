/// A palette request that already passed URL validation.
#[derive(Debug, Clone)]
pub struct PaletteRequest {
    pub url: String,
}
