use crate::application::{
    extract_palette::use_case::ExtractPaletteUseCase,
    generate_preview::use_case::GeneratePreviewUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub palette: Arc<ExtractPaletteUseCase>,
    pub preview: Arc<GeneratePreviewUseCase>,
}
