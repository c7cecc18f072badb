use crate::{
    application::generate_preview::dto::PreviewRequest,
    presentation::http::{errors::AppError, handlers::ImageUrlBody, state::AppState},
};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

pub async fn generate_preview(
    State(state): State<AppState>,
    Json(body): Json<ImageUrlBody>,
) -> Result<Response, AppError> {
    let url = body.validated_url()?;

    let preview = state
        .preview
        .execute(PreviewRequest { url: url.clone() })
        .await
        .map_err(|e| AppError::from_pipeline(e, &url))?;

    Ok((
        [(header::CONTENT_TYPE, preview.content_type)],
        preview.bytes,
    )
        .into_response())
}
