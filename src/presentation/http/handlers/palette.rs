use crate::{
    application::extract_palette::dto::PaletteRequest,
    domain::swatch::PaletteEntry,
    presentation::http::{errors::AppError, handlers::ImageUrlBody, state::AppState},
};
use axum::{Json, extract::State};

pub async fn extract_palette(
    State(state): State<AppState>,
    Json(body): Json<ImageUrlBody>,
) -> Result<Json<Vec<PaletteEntry>>, AppError> {
    let url = body.validated_url()?;

    let entries = state
        .palette
        .execute(PaletteRequest { url: url.clone() })
        .await
        .map_err(|e| AppError::from_pipeline(e, &url))?;

    Ok(Json(entries))
}
