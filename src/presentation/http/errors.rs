//! HTTP error handling and response conversion.
//!
//! Client-visible bodies are plain text with fixed wording; downstream
//! consumers match on these strings, so they must not drift. Source chains
//! stay on the server side of the line and only show up in logs.

use crate::domain::errors::PipelineError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request body had no usable `url` property (400).
    MissingUrl,

    /// The supplied URL is not a well-formed HTTP(S) URL (400).
    MalformedUrl(String),

    /// The image could not be retrieved from the URL (500).
    ImageUnavailable(String),

    /// The fetched bytes were not a decodable image (500).
    ImageUndecodable(String),

    /// Unclassified internal failure (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "Body is missing property \"url\"."),
            Self::MalformedUrl(url) => {
                write!(f, "Property \"url\" is poorly formatted ({}).", url)
            }
            Self::ImageUnavailable(url) => write!(f, "Failed to get image at url {}.", url),
            Self::ImageUndecodable(url) => write!(f, "Failed to decode image at url {}.", url),
            Self::Internal(_) => write!(f, "Internal server error."),
        }
    }
}

impl AppError {
    /// Classify a pipeline failure for the request that was processing `url`.
    pub fn from_pipeline(err: PipelineError, url: &str) -> Self {
        match err {
            PipelineError::Fetch(source) => {
                tracing::warn!(url, error = %source, "image fetch failed");
                Self::ImageUnavailable(url.to_string())
            }
            PipelineError::Decode(source) => {
                tracing::warn!(url, error = %source, "image decode failed");
                Self::ImageUndecodable(url.to_string())
            }
            PipelineError::Palette(source) => {
                tracing::error!(url, error = %source, "palette extraction failed");
                Self::Internal(source.to_string())
            }
            PipelineError::Encode(source) => {
                tracing::error!(url, error = %source, "preview encoding failed");
                Self::Internal(source.to_string())
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::MalformedUrl(_) => StatusCode::BAD_REQUEST,
            Self::ImageUnavailable(_) | Self::ImageUndecodable(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            StatusCode::BAD_REQUEST => tracing::warn!("error={}", self),
            _ => tracing::info!("error={}", self),
        }
        (status, self.to_string()).into_response()
    }
}
