use super::helpers::{FailingFetcher, StubExtractor, assert_status, get, read_json, spawn_app};
use axum::http::StatusCode;
use std::sync::Arc;
use vibrant_api::infrastructure::palette::traits::CategorySwatches;

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = spawn_app(
        Arc::new(FailingFetcher),
        Arc::new(StubExtractor(CategorySwatches::new())),
    );

    let res = get(&app, "/health").await;
    assert_status(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
