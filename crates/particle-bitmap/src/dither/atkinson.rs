//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! Compared to Floyd-Steinberg it grows less contrast and keeps more detail,
//! which suits small 1-bit screens.

use crate::output::BinaryRaster;
use crate::preprocess::GrayscaleRaster;

use super::{dither_with_kernel, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// The Atkinson kernel distributes error to 6 neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, for a total of 6/8 = 75%.
///
/// # Example
///
/// ```
/// use particle_bitmap::{Atkinson, Dither, GrayscaleRaster};
///
/// let raster = GrayscaleRaster::filled(8, 8, 255);
/// let bits = Atkinson.dither(&raster);
/// assert_eq!(bits.ink_count(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, raster: &GrayscaleRaster) -> BinaryRaster {
        dither_with_kernel(raster, &ATKINSON)
    }
}
