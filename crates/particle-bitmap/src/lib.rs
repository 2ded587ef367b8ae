//! particle-bitmap: monochrome bitmaps for particle documents
//!
//! This library turns arbitrary raster images into the compact 1-bit text
//! encoding that particle viewers render: an aspect-preserving downscale,
//! Atkinson error diffusion to black and white, and a per-row run-length
//! code over the letters `A-Z`/`a-z`.
//!
//! # Quick Start
//!
//! The [`BitmapEncoder`] builder is the primary entry point:
//!
//! ```
//! use image::{DynamicImage, GrayImage, Luma};
//! use particle_bitmap::BitmapEncoder;
//!
//! let img = DynamicImage::ImageLuma8(GrayImage::from_fn(8, 2, |x, _| {
//!     Luma([if x < 2 { 0 } else { 255 }])
//! }));
//!
//! let block = BitmapEncoder::new().max_size(300, 180).encode(&img).unwrap();
//!
//! assert_eq!(block.width, 8);
//! assert_eq!(block.height, 2);
//! assert_eq!(block.pixels, "B B");
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! DynamicImage            (decoded by the `image` crate)
//!     |
//!     v
//! [Resize]                scale = min(maxW/W, maxH/H, 1), Lanczos3, never up
//!     |
//!     v
//! [Flatten]               alpha over white, ITU-R 601 luma
//!     |
//!     v
//! GrayscaleRaster         u8 per pixel
//!     |
//!     v
//! [Atkinson]              f64 arena, > 127 is background, 6 x err/8
//!     |
//!     v
//! BinaryRaster            bool per pixel, true = ink
//!     |
//!     v
//! [Row codec]             runs -> letters, trailing background dropped
//!     |
//!     v
//! PixelBlock              {width, height, pixels, style}
//! ```
//!
//! # Wire Format
//!
//! `pixels` holds one field per row, separated by single spaces. Within a
//! field, an uppercase letter is a run of ink and a lowercase letter a run of
//! background, `A`/`a` = 1 through `Z`/`z` = 26. Longer runs repeat `Z`/`z`.
//! A background run touching the right edge is left out, so an empty field
//! is an all-background row and decoding needs `width`.
//!
//! # Numeric Behavior
//!
//! Two numeric details are fixed, since viewers expect them bit for bit:
//!
//! - the cut is `value > 127`, so a flat 127 is ink and 128 is paper
//! - accumulated values are never clamped, they may wander outside
//!   `[0, 255]` until the pixel is read

pub mod api;
pub mod codec;
pub mod dither;
pub mod output;
pub mod preprocess;


pub use api::{BitmapEncoder, BitmapError};
pub use codec::DecodeError;
pub use dither::{Atkinson, Dither};
pub use output::{BinaryRaster, BlockStyle, PixelBlock};
pub use preprocess::{GrayscaleRaster, PreprocessOptions, Preprocessor};
