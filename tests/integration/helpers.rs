use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use bytes::Bytes;
use std::sync::Arc;
use tower::ServiceExt;
use vibrant_api::{
    application::{
        extract_palette::use_case::ExtractPaletteUseCase,
        generate_preview::use_case::GeneratePreviewUseCase,
    },
    infrastructure::{
        codec::image_codec::ImageCrateCodec,
        fetcher::traits::ImageFetcher,
        palette::traits::{CategorySwatches, PaletteExtractor},
    },
    presentation::http::{routes::create_router, state::AppState},
};

/// Fetcher double that serves the same bytes for any URL.
pub struct StaticFetcher(pub Bytes);

#[async_trait]
impl ImageFetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> anyhow::Result<Bytes> {
        Ok(self.0.clone())
    }
}

/// Fetcher double that fails every request, like an unreachable host.
pub struct FailingFetcher;

#[async_trait]
impl ImageFetcher for FailingFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<Bytes> {
        Err(anyhow::anyhow!("connection reset fetching {}", url))
    }
}

/// Extractor double that returns a canned category mapping.
pub struct StubExtractor(pub CategorySwatches);

#[async_trait]
impl PaletteExtractor for StubExtractor {
    async fn extract(&self, _image_data: &[u8]) -> anyhow::Result<CategorySwatches> {
        Ok(self.0.clone())
    }
}

/// Build the full router with the real codec and the given doubles.
pub fn spawn_app(fetcher: Arc<dyn ImageFetcher>, extractor: Arc<dyn PaletteExtractor>) -> Router {
    let codec = Arc::new(ImageCrateCodec);
    let state = AppState {
        palette: Arc::new(ExtractPaletteUseCase::new(
            fetcher.clone(),
            codec.clone(),
            extractor,
            500,
        )),
        preview: Arc::new(GeneratePreviewUseCase::new(fetcher, codec, 5)),
    };
    create_router(state)
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_bytes(res: Response) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec()
}

pub async fn read_text(res: Response) -> String {
    String::from_utf8(read_bytes(res).await).expect("body was not UTF-8")
}

pub async fn read_json(res: Response) -> serde_json::Value {
    serde_json::from_slice(&read_bytes(res).await).expect("body was not JSON")
}

pub fn assert_status(actual: StatusCode, expected: StatusCode) {
    assert_eq!(actual, expected, "unexpected status code");
}

/// A solid-color PNG for feeding the real codec.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        image::Rgb([190, 36, 60]),
    ));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("failed to encode test PNG");
    buf.into_inner()
}
