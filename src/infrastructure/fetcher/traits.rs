use async_trait::async_trait;
use bytes::Bytes;

/// Retrieves raw image bytes for a validated URL.
///
/// Any failure (connect error, timeout, non-2xx status) is reported as a
/// plain error; callers treat all of them uniformly as "image unavailable".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<Bytes>;
}
