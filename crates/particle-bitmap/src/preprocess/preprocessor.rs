//! Resize, then flatten: the steps that turn a decoded image into the
//! grayscale working raster.
//!
//! Resize happens **first**, on the image's native color mode, so the
//! Lanczos filter sees real alpha coverage at the original resolution.
//! Flattening runs afterwards on the smaller image.

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::api::BitmapError;

use super::flatten::flatten_to_gray;
use super::gray::GrayscaleRaster;
use super::options::PreprocessOptions;
use super::resize::resize_to_fit;

/// Image preprocessor producing a [`GrayscaleRaster`] ready for dithering.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, RgbImage, Rgb};
/// use particle_bitmap::{PreprocessOptions, Preprocessor};
///
/// let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(600, 360, Rgb([255, 255, 255])));
/// let preprocessor = Preprocessor::new(PreprocessOptions::new().max_size(300, 180));
///
/// let raster = preprocessor.process(&img).unwrap();
/// assert_eq!((raster.width(), raster.height()), (300, 180));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// Resize `img` into the configured box and flatten it to grayscale.
    ///
    /// # Errors
    ///
    /// [`BitmapError::EmptyImage`] if either input dimension is zero.
    pub fn process(&self, img: &DynamicImage) -> Result<GrayscaleRaster, BitmapError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(BitmapError::EmptyImage { width, height });
        }

        let resized = resize_to_fit(img, self.options.max_width, self.options.max_height);
        let raster = flatten_to_gray(&resized, self.options.background);

        debug!(
            width = raster.width(),
            height = raster.height(),
            "Preprocessed image to grayscale"
        );

        Ok(raster)
    }
}
