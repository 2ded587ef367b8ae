//! Unified error type for the particle-bitmap public API.
//!
//! Dithering and encoding are total functions, so every failure here
//! originates before the raster exists: the bytes didn't decode, or the
//! decoded image has no pixels.

use thiserror::Error;

/// Why an image could not be turned into a [`PixelBlock`](crate::PixelBlock).
///
/// # Example
///
/// ```
/// use particle_bitmap::{BitmapEncoder, BitmapError};
///
/// let err = BitmapEncoder::new().encode_bytes(b"not an image").unwrap_err();
/// assert!(matches!(err, BitmapError::Decode(_)));
/// ```
#[derive(Debug, Error)]
pub enum BitmapError {
    /// The bytes are not a readable image.
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The image has zero width or height.
    #[error("image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}
