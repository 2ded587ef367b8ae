//! Error diffusion dithering to 1-bit monochrome.
//!
//! # Algorithm
//!
//! Pixels are visited once, row-major, top to bottom and left to right
//! (no serpentine). Each pixel's current value (original intensity plus
//! error received so far) is compared against [`THRESHOLD`]:
//!
//! - `value > 127` becomes background (white, quantized to 255)
//! - otherwise it becomes ink (black, quantized to 0)
//!
//! The quantization error `value - quantized` is then pushed to the
//! kernel's neighbors. Targets outside the raster are skipped; nothing
//! wraps to the next row and nothing is clamped. Accumulated values may
//! leave `[0, 255]` before they are read.
//!
//! # Example
//!
//! ```
//! use particle_bitmap::{Atkinson, Dither, GrayscaleRaster};
//!
//! let raster = GrayscaleRaster::new(vec![0, 255, 255, 0], 2, 2);
//! let bits = Atkinson.dither(&raster);
//!
//! assert_eq!(bits.bits(), &[true, false, false, true]);
//! ```

mod atkinson;
mod kernel;

pub use atkinson::Atkinson;
pub use kernel::{Kernel, ATKINSON};

use crate::output::BinaryRaster;
use crate::preprocess::GrayscaleRaster;

/// Values strictly above this become background; everything else is ink.
pub const THRESHOLD: f64 = 127.0;

/// Quantized level for background pixels.
const WHITE: f64 = 255.0;

/// Quantized level for ink pixels.
const BLACK: f64 = 0.0;

/// Trait for 1-bit dithering algorithms.
///
/// Implementors turn a grayscale raster into a binary raster of the same
/// dimensions. Dithering never fails on a well-formed raster.
pub trait Dither {
    /// Dither `raster` to ink/background bits.
    fn dither(&self, raster: &GrayscaleRaster) -> BinaryRaster;
}

/// Quantize one working value. Returns `(is_ink, quantized_level)`.
#[inline]
pub(crate) fn quantize(value: f64) -> (bool, f64) {
    if value > THRESHOLD {
        (false, WHITE)
    } else {
        (true, BLACK)
    }
}

/// Core error diffusion loop parameterized by kernel.
///
/// The working buffer is a single `width * height` arena of `f64`,
/// initialized from the raster intensities and indexed `y * width + x`.
/// It is dropped when this function returns.
pub fn dither_with_kernel(raster: &GrayscaleRaster, kernel: &Kernel) -> BinaryRaster {
    let width = raster.width();
    let height = raster.height();
    if raster.is_empty() {
        return BinaryRaster::blank(width, height);
    }

    let mut work: Vec<f64> = raster.pixels().iter().map(|&p| f64::from(p)).collect();
    let mut bits = vec![false; width * height];
    let divisor = f64::from(kernel.divisor);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let value = work[idx];
            let (ink, quantized) = quantize(value);
            bits[idx] = ink;
            work[idx] = quantized;

            let error = value - quantized;
            if error == 0.0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + i64::from(dx);
                let ny = y as i64 + i64::from(dy);
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                work[ny as usize * width + nx as usize] += error * f64::from(weight) / divisor;
            }
        }
    }

    BinaryRaster::new(bits, width, height)
}
