//! Preprocessing options and configuration.
//!
//! This module provides the [`PreprocessOptions`] struct for configuring
//! the resize and color flattening steps that run before dithering.

/// Default bounding box width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 300;

/// Default bounding box height in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 180;

/// Configuration options for image preprocessing.
///
/// # Defaults
///
/// - Bounding box: 300 x 180 (fits the viewer with room for surrounding text)
/// - Background: 255 (transparent areas become white paper)
///
/// # Example
///
/// ```
/// use particle_bitmap::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .max_size(400, 240)
///     .background(255);
///
/// assert_eq!(options.max_width, 400);
/// assert_eq!(options.max_height, 240);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Largest allowed output width. Wider images are scaled down.
    pub max_width: u32,

    /// Largest allowed output height. Taller images are scaled down.
    pub max_height: u32,

    /// Gray level that transparent pixels are composited onto.
    pub background: u8,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            background: 255,
        }
    }
}

impl PreprocessOptions {
    /// Create new preprocessing options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounding box the image must fit into.
    ///
    /// Images are only ever scaled down, never up.
    #[inline]
    pub fn max_size(mut self, width: u32, height: u32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Set the gray level used beneath transparent pixels.
    #[inline]
    pub fn background(mut self, level: u8) -> Self {
        self.background = level;
        self
    }
}
