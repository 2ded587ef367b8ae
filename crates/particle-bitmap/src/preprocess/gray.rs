//! Grayscale working raster.

/// An 8-bit intensity raster, the input of every [`Dither`](crate::dither::Dither)
/// implementation.
///
/// Pixels are stored row-major (`y * width + x`). `0` is black, `255` is white.
///
/// # Example
///
/// ```
/// use particle_bitmap::GrayscaleRaster;
///
/// let raster = GrayscaleRaster::new(vec![0, 128, 255, 64], 2, 2);
/// assert_eq!(raster.get(1, 0), 128);
/// assert_eq!(raster.row(1), &[255, 64]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleRaster {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayscaleRaster {
    /// Wrap row-major intensities.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// A raster where every pixel has the same intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(vec![value; width * height], width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    /// One row of intensities, left to right.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// True when the raster has no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
