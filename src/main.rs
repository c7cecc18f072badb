use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use std::{sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use vibrant_api::{
    application::{
        extract_palette::use_case::ExtractPaletteUseCase,
        generate_preview::use_case::GeneratePreviewUseCase,
    },
    config::Config,
    infrastructure::{
        codec::image_codec::ImageCrateCodec, fetcher::http_fetcher::HttpImageFetcher,
        palette::prominence_extractor::ProminenceExtractor,
    },
    presentation::http::{routes::create_router, state::AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging with safe environment filter
    // Uses RUST_LOG if set, otherwise uses sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,vibrant_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let fetcher = Arc::new(HttpImageFetcher::new(Duration::from_secs(
        config.fetch_timeout_seconds,
    ))?);
    let codec = Arc::new(ImageCrateCodec);
    let extractor = Arc::new(ProminenceExtractor);

    let state = AppState {
        palette: Arc::new(ExtractPaletteUseCase::new(
            fetcher.clone(),
            codec.clone(),
            extractor,
            config.max_image_dimension,
        )),
        preview: Arc::new(GeneratePreviewUseCase::new(
            fetcher,
            codec,
            config.preview_reduce_factor,
        )),
    };

    // Anyone may call this service; it only ever reads public image URLs.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
