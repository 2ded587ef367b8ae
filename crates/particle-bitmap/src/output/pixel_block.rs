//! PixelBlock: the serialized form of one processed image.

use serde::{Deserialize, Serialize};

use crate::codec::{decode_raster, encode_raster, DecodeError};

use super::BinaryRaster;

/// Presentation hints carried next to the pixels.
///
/// Serialized with the viewer's hyphenated keys:
///
/// ```
/// use particle_bitmap::BlockStyle;
///
/// let json = serde_json::to_string(&BlockStyle::default()).unwrap();
/// assert_eq!(json, r#"{"scale":1,"margin-top":8,"margin-bottom":8}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub scale: u32,
    #[serde(rename = "margin-top")]
    pub margin_top: u32,
    #[serde(rename = "margin-bottom")]
    pub margin_bottom: u32,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            scale: 1,
            margin_top: 8,
            margin_bottom: 8,
        }
    }
}

/// One image, encoded for the viewer.
///
/// `width` and `height` always describe the raster that produced `pixels`;
/// a reader needs both to restore the trailing background each row drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBlock {
    pub width: usize,
    pub height: usize,
    /// Encoded rows joined by single spaces, exactly `height` fields.
    pub pixels: String,
    pub style: BlockStyle,
}

impl PixelBlock {
    /// Encode every row of `raster` and package it with its dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use particle_bitmap::{BinaryRaster, BlockStyle, PixelBlock};
    ///
    /// let raster = BinaryRaster::new(vec![true, false, true, false, false, false], 3, 2);
    /// let block = PixelBlock::from_raster(&raster, BlockStyle::default());
    ///
    /// assert_eq!(block.width, 3);
    /// assert_eq!(block.height, 2);
    /// assert_eq!(block.pixels, "AaA ");
    /// ```
    pub fn from_raster(raster: &BinaryRaster, style: BlockStyle) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            pixels: encode_raster(raster),
            style,
        }
    }

    /// Decode the pixels back into a [`BinaryRaster`].
    pub fn to_raster(&self) -> Result<BinaryRaster, DecodeError> {
        decode_raster(&self.pixels, self.width, self.height)
    }
}
