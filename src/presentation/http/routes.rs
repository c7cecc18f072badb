use super::{
    handlers::{health, palette, preload},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/palette", post(palette::extract_palette))
        .route("/preload", post(preload::generate_preview))
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
