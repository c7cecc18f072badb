//! Application configuration loading from environment variables.
//!
//! Every setting has a default, so the service starts with no environment
//! at all; variables exist to tune deployments.
//!
//! - `HOST`: bind address (default: "0.0.0.0")
//! - `PORT`: server port (default: 3000)
//! - `FETCH_TIMEOUT_SECONDS`: upstream image fetch timeout (default: 10)
//! - `MAX_IMAGE_DIMENSION`: longest-axis bound before palette extraction
//!   (default: 500)
//! - `PREVIEW_REDUCE_FACTOR`: axis divisor for preview generation
//!   (default: 5)
//! - `MAX_BODY_BYTES`: request body limit; bodies here are small JSON
//!   (default: 65536)
//! - `RUST_LOG`: log filter (default: "info,vibrant_api=debug,tower_http=debug")

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Timeout applied to each upstream image fetch, in seconds
    pub fetch_timeout_seconds: u64,

    /// Longest-axis pixel bound applied before palette extraction
    pub max_image_dimension: u32,

    /// Axis divisor used when generating preview images
    pub preview_reduce_factor: u32,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            fetch_timeout_seconds: env_or("FETCH_TIMEOUT_SECONDS", 10)?,
            max_image_dimension: env_or("MAX_IMAGE_DIMENSION", 500)?,
            preview_reduce_factor: env_or("PREVIEW_REDUCE_FACTOR", 5)?,
            max_body_bytes: env_or("MAX_BODY_BYTES", 64 * 1024)?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
