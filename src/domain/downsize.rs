//! Pure sizing arithmetic for the downsize and preview pipelines.
//!
//! Both operations scale width and height by a single factor and floor the
//! result, so aspect ratio is preserved exactly to integer truncation.

/// Longest-dimension bound applied before palette extraction.
pub const DEFAULT_MAX_DIMENSION: u32 = 500;

/// Axis divisor applied when generating a preview image.
pub const DEFAULT_REDUCE_FACTOR: u32 = 5;

/// Inclusive range the preview blur sigma is clamped to. The lower bound is
/// fractional even though [`preview_blur_sigma`] only ever produces whole
/// numbers for non-degenerate previews; it is kept as-is so output matches
/// the historical behavior byte for byte.
pub const BLUR_SIGMA_MIN: f32 = 0.3;
pub const BLUR_SIGMA_MAX: f32 = 1000.0;

/// Dimensions that keep the longer axis within `bound`.
///
/// Returns `None` when the image is already within the bound, i.e. the
/// caller should leave it untouched. Applying the policy to its own output
/// is a no-op.
pub fn bounded_dimensions(width: u32, height: u32, bound: u32) -> Option<(u32, u32)> {
    let longest = width.max(height);
    if longest <= bound {
        return None;
    }
    let factor = f64::from(bound) / f64::from(longest);
    let new_width = (f64::from(width) * factor).floor() as u32;
    let new_height = (f64::from(height) * factor).floor() as u32;
    Some((new_width, new_height))
}

/// Dimensions of the blurred preview: both axes divided by `reduce_factor`
/// and floored, clamped to at least 1x1 so the codec is never asked to
/// produce a zero-sized image.
pub fn preview_dimensions(width: u32, height: u32, reduce_factor: u32) -> (u32, u32) {
    let reduce_factor = reduce_factor.max(1);
    ((width / reduce_factor).max(1), (height / reduce_factor).max(1))
}

/// Blur sigma for a preview of the given (post-reduction) dimensions:
/// `ceil(min(width, height) / 100)` clamped to
/// `[BLUR_SIGMA_MIN, BLUR_SIGMA_MAX]`.
pub fn preview_blur_sigma(width: u32, height: u32) -> f32 {
    let raw = (f64::from(width.min(height)) / 100.0).ceil() as f32;
    raw.clamp(BLUR_SIGMA_MIN, BLUR_SIGMA_MAX)
}
