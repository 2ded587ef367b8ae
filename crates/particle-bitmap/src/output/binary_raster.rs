//! BinaryRaster: the 1-bit result of dithering.

/// The canonical output of the dithering pipeline.
///
/// Stores one bit per pixel in row-major order: `true` is ink (black),
/// `false` is background (white paper). Immutable once built.
///
/// # Example
///
/// ```
/// use particle_bitmap::BinaryRaster;
///
/// let raster = BinaryRaster::new(vec![true, false, false, true], 2, 2);
///
/// assert_eq!(raster.width(), 2);
/// assert_eq!(raster.height(), 2);
/// assert!(raster.is_ink(0, 0));
/// assert_eq!(raster.row(1), &[false, true]);
/// assert_eq!(raster.ink_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRaster {
    /// One bit per pixel, row-major.
    bits: Vec<bool>,
    width: usize,
    height: usize,
}

impl BinaryRaster {
    /// Create a raster from row-major bits.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `bits.len() == width * height`.
    pub fn new(bits: Vec<bool>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            bits.len(),
            width * height,
            "bits length ({}) must match width * height ({}x{}={})",
            bits.len(),
            width,
            height,
            width * height,
        );
        Self {
            bits,
            width,
            height,
        }
    }

    /// An all-background raster.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::new(vec![false; width * height], width, height)
    }

    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
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
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    /// Bits of row `y`, left to right.
    #[inline]
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.bits[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    ///
    /// Yields exactly `height` rows, even when `width` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Convert to 8-bit luma bytes (ink = 0, background = 255), e.g. for
    /// writing a preview PNG.
    pub fn to_luma(&self) -> Vec<u8> {
        self.bits
            .iter()
            .map(|&ink| if ink { 0 } else { 255 })
            .collect()
    }
}
