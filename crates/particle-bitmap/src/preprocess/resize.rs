//! Aspect-preserving downscale into a bounding box.
//!
//! Uses the `image` crate's Lanczos3 filter. Images that already fit are
//! returned as-is (borrowed), so they stay pixel-identical.

use std::borrow::Cow;

use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

/// Compute the scale factor for fitting `width x height` into the box.
///
/// `min(max_width / width, max_height / height, 1.0)`: never greater than one.
pub fn fit_scale(width: u32, height: u32, max_width: u32, max_height: u32) -> f64 {
    let width_ratio = f64::from(max_width) / f64::from(width);
    let height_ratio = f64::from(max_height) / f64::from(height);
    width_ratio.min(height_ratio).min(1.0)
}

/// Output dimensions for fitting `width x height` into the box.
///
/// Returns `None` when the image already fits and no resampling is needed.
/// Each side is floored at one pixel, so a zero bound still yields a 1-pixel
/// side; callers are expected to pass positive bounds.
pub fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Option<(u32, u32)> {
    let scale = fit_scale(width, height, max_width, max_height);
    if scale >= 1.0 {
        return None;
    }

    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(height) * scale).round() as u32).max(1);
    Some((new_width, new_height))
}

/// Downscale `img` so it fits within `max_width x max_height`.
///
/// The input must have non-zero dimensions; callers reject empty images first.
pub fn resize_to_fit(img: &DynamicImage, max_width: u32, max_height: u32) -> Cow<'_, DynamicImage> {
    let (orig_w, orig_h) = (img.width(), img.height());

    match fit_dimensions(orig_w, orig_h, max_width, max_height) {
        Some((new_width, new_height)) => {
            debug!(
                orig_w,
                orig_h,
                new_width,
                new_height,
                "Downscaling image to fit bounds"
            );
            Cow::Owned(img.resize_exact(new_width, new_height, FilterType::Lanczos3))
        }
        None => {
            debug!(orig_w, orig_h, "Image already fits, skipping resize");
            Cow::Borrowed(img)
        }
    }
}
