//! Output types for the pipeline.
//!
//! - [`BinaryRaster`]: the 1-bit result of dithering
//! - [`PixelBlock`]: the encoded, serializable unit that goes into a
//!   particle document, with its [`BlockStyle`]

mod binary_raster;
mod pixel_block;

pub use binary_raster::BinaryRaster;
pub use pixel_block::{BlockStyle, PixelBlock};
