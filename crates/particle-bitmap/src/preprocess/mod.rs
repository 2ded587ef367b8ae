//! Image preprocessing ahead of dithering.
//!
//! The pipeline:
//!
//! 1. **Resize** (Lanczos3) - downscale into the configured bounding box,
//!    preserving aspect ratio and never upscaling
//! 2. **Flatten** - composite transparency onto a white background and
//!    reduce to 8-bit luma
//!
//! The result is a [`GrayscaleRaster`], the only input the ditherer accepts.
//!
//! # Example
//!
//! ```
//! use image::{DynamicImage, GrayImage, Luma};
//! use particle_bitmap::{Atkinson, Dither, PreprocessOptions, Preprocessor};
//!
//! let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(20, 20, Luma([0])));
//! let raster = Preprocessor::new(PreprocessOptions::new().max_size(10, 10))
//!     .process(&img)
//!     .unwrap();
//!
//! let bits = Atkinson.dither(&raster);
//! assert_eq!(bits.width(), 10);
//! assert_eq!(bits.ink_count(), 100);
//! ```

mod flatten;
mod gray;
mod options;
mod preprocessor;
mod resize;

pub use flatten::{flatten_to_gray, luma};
pub use gray::GrayscaleRaster;
pub use options::{PreprocessOptions, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
pub use preprocessor::Preprocessor;
pub use resize::{fit_dimensions, fit_scale, resize_to_fit};
