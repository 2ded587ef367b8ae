//! BitmapEncoder builder -- the primary entry point for the crate.
//!
//! [`BitmapEncoder`] wraps the whole pipeline (resize, flatten, Atkinson
//! dither, row encoding) behind a small fluent configuration API.

use image::DynamicImage;
use tracing::debug;

use crate::dither::{Atkinson, Dither};
use crate::output::{BlockStyle, PixelBlock};
use crate::preprocess::{PreprocessOptions, Preprocessor};

use super::BitmapError;

/// Image-to-[`PixelBlock`] encoder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`encode()`](Self::encode) takes `&self`, so one encoder can serve many
///   images, including from several threads at once
/// - Either a complete [`PixelBlock`] is returned or an error; there is no
///   partial output
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgb, RgbImage};
/// use particle_bitmap::BitmapEncoder;
///
/// let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(600, 360, Rgb([255, 255, 255])));
/// let block = BitmapEncoder::new().max_size(300, 180).encode(&img).unwrap();
///
/// assert_eq!((block.width, block.height), (300, 180));
/// assert!(block.pixels.chars().all(|c| c == ' '));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitmapEncoder {
    preprocess: PreprocessOptions,
    style: BlockStyle,
}

impl BitmapEncoder {
    /// Create an encoder with the default 300 x 180 box and default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounding box images are scaled down into.
    #[inline]
    pub fn max_size(mut self, width: u32, height: u32) -> Self {
        self.preprocess = self.preprocess.max_size(width, height);
        self
    }

    /// Set the style descriptor attached to every produced block.
    #[inline]
    pub fn style(mut self, style: BlockStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace all preprocessing options at once.
    #[inline]
    pub fn preprocess(mut self, options: PreprocessOptions) -> Self {
        self.preprocess = options;
        self
    }

    /// Resize, flatten, dither and encode a decoded image.
    ///
    /// # Errors
    ///
    /// [`BitmapError::EmptyImage`] for zero-area input.
    pub fn encode(&self, img: &DynamicImage) -> Result<PixelBlock, BitmapError> {
        let gray = Preprocessor::new(self.preprocess.clone()).process(img)?;
        let bits = Atkinson.dither(&gray);
        let block = PixelBlock::from_raster(&bits, self.style);

        debug!(
            width = block.width,
            height = block.height,
            ink = bits.ink_count(),
            encoded_len = block.pixels.len(),
            "Encoded pixel block"
        );

        Ok(block)
    }

    /// Decode raw file bytes (PNG, JPEG, GIF, WebP, BMP) and encode them.
    ///
    /// # Errors
    ///
    /// [`BitmapError::Decode`] if the bytes are not a readable image, or
    /// anything [`encode()`](Self::encode) returns.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<PixelBlock, BitmapError> {
        let img = image::load_from_memory(bytes)?;
        self.encode(&img)
    }
}
