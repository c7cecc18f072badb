pub mod health;
pub mod palette;
pub mod preload;

use super::errors::AppError;
use crate::domain::url;
use serde::Deserialize;

/// Request body shared by `/palette` and `/preload`.
///
/// `url` is optional at the serde level so a missing property reaches the
/// handler instead of tripping a framework rejection with foreign wording.
#[derive(Debug, Deserialize)]
pub struct ImageUrlBody {
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageUrlBody {
    /// Apply the presence and format checks, yielding the validated URL.
    pub fn validated_url(self) -> Result<String, AppError> {
        let url = match self.url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(AppError::MissingUrl),
        };
        if !url::is_well_formed(&url) {
            return Err(AppError::MalformedUrl(url));
        }
        Ok(url)
    }
}
