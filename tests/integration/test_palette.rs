use super::helpers::{
    FailingFetcher, StaticFetcher, StubExtractor, assert_status, png_bytes, post_json, read_json,
    read_text, spawn_app,
};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::json;
use std::sync::Arc;
use vibrant_api::{
    domain::swatch::{Swatch, SwatchCategory},
    infrastructure::palette::{
        prominence_extractor::ProminenceExtractor, traits::CategorySwatches,
    },
};

fn stub_swatches() -> CategorySwatches {
    let mut swatches = CategorySwatches::new();
    swatches.insert(
        SwatchCategory::Vibrant,
        Swatch {
            hex: "#c02040".to_string(),
            population: 812,
        },
    );
    swatches.insert(
        SwatchCategory::DarkMuted,
        Swatch {
            hex: "#203040".to_string(),
            population: 77,
        },
    );
    swatches
}

#[tokio::test]
async fn missing_url_property_is_a_400_with_exact_wording() {
    let app = spawn_app(
        Arc::new(FailingFetcher),
        Arc::new(StubExtractor(CategorySwatches::new())),
    );

    let res = post_json(&app, "/palette", json!({})).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_text(res).await, "Body is missing property \"url\".");
}

#[tokio::test]
async fn empty_url_counts_as_missing() {
    let app = spawn_app(
        Arc::new(FailingFetcher),
        Arc::new(StubExtractor(CategorySwatches::new())),
    );

    let res = post_json(&app, "/palette", json!({ "url": "" })).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_text(res).await, "Body is missing property \"url\".");
}

#[tokio::test]
async fn poorly_formatted_url_echoes_the_value() {
    let app = spawn_app(
        Arc::new(FailingFetcher),
        Arc::new(StubExtractor(CategorySwatches::new())),
    );

    let res = post_json(&app, "/palette", json!({ "url": "bad" })).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_text(res).await,
        "Property \"url\" is poorly formatted (bad)."
    );
}

#[tokio::test]
async fn fetch_failure_is_a_500_with_exact_wording() {
    let app = spawn_app(
        Arc::new(FailingFetcher),
        Arc::new(StubExtractor(CategorySwatches::new())),
    );

    let res = post_json(
        &app,
        "/palette",
        json!({ "url": "https://example.com/image.png" }),
    )
    .await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_text(res).await,
        "Failed to get image at url https://example.com/image.png."
    );
}

#[tokio::test]
async fn undecodable_image_is_a_500() {
    let app = spawn_app(
        Arc::new(StaticFetcher(Bytes::from_static(b"these are not pixels"))),
        Arc::new(StubExtractor(CategorySwatches::new())),
    );

    let res = post_json(
        &app,
        "/palette",
        json!({ "url": "https://example.com/broken.png" }),
    )
    .await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_text(res).await,
        "Failed to decode image at url https://example.com/broken.png."
    );
}

#[tokio::test]
async fn palette_lists_all_categories_in_fixed_order_with_defaults() {
    let app = spawn_app(
        Arc::new(StaticFetcher(Bytes::from(png_bytes(800, 2000)))),
        Arc::new(StubExtractor(stub_swatches())),
    );

    let res = post_json(
        &app,
        "/palette",
        json!({ "url": "https://example.com/image.png" }),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    let entries = body.as_array().expect("expected a JSON array");
    assert_eq!(entries.len(), 6);

    let keys: Vec<_> = entries.iter().map(|e| e["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec![
            "Vibrant",
            "Muted",
            "DarkVibrant",
            "DarkMuted",
            "LightVibrant",
            "LightMuted"
        ]
    );

    assert_eq!(entries[0]["hex"], "#c02040");
    assert_eq!(entries[0]["population"], 812);
    assert_eq!(entries[3]["hex"], "#203040");
    assert_eq!(entries[3]["population"], 77);

    // Categories the extractor had nothing for fall back to white/zero.
    assert_eq!(entries[1]["hex"], "#ffffff");
    assert_eq!(entries[1]["population"], 0);
}

#[tokio::test]
async fn real_extractor_produces_well_formed_entries() {
    let app = spawn_app(
        Arc::new(StaticFetcher(Bytes::from(png_bytes(640, 480)))),
        Arc::new(ProminenceExtractor),
    );

    let res = post_json(
        &app,
        "/palette",
        json!({ "url": "https://example.com/image.png" }),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    let entries = body.as_array().expect("expected a JSON array");
    assert_eq!(entries.len(), 6);
    for entry in entries {
        let hex = entry["hex"].as_str().unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(entry["population"].as_u64().is_some());
    }
}
