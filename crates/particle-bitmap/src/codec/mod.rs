//! Run-length text encoding of binary rasters.
//!
//! Each row becomes a string over `[A-Za-z]` (see [`encode_row`]); rows are
//! joined with a single space. The wire format has no escaping and no line
//! terminators, and an empty field means the whole row is background.

mod error;
mod row;

pub use error::DecodeError;
pub use row::{decode_row, encode_row, MAX_RUN};

use crate::output::BinaryRaster;

/// Field separator between encoded rows.
pub const ROW_SEPARATOR: &str = " ";

/// Encode every row of `raster`, top to bottom, joined by [`ROW_SEPARATOR`].
///
/// The result always has exactly `height` fields.
///
/// ```
/// use particle_bitmap::{codec::encode_raster, BinaryRaster};
///
/// let raster = BinaryRaster::new(vec![true, false, false, false, false, true], 3, 2);
/// assert_eq!(encode_raster(&raster), "A bA");
/// ```
pub fn encode_raster(raster: &BinaryRaster) -> String {
    raster
        .rows()
        .map(encode_row)
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

/// Decode a pixel string produced by [`encode_raster`].
///
/// # Errors
///
/// [`DecodeError::RowCount`] if the string doesn't split into exactly
/// `height` fields, or any row-level [`DecodeError`].
pub fn decode_raster(pixels: &str, width: usize, height: usize) -> Result<BinaryRaster, DecodeError> {
    let fields: Vec<&str> = if height == 0 && pixels.is_empty() {
        Vec::new()
    } else {
        pixels.split(ROW_SEPARATOR).collect()
    };

    if fields.len() != height {
        return Err(DecodeError::RowCount {
            expected: height,
            found: fields.len(),
        });
    }

    let mut bits = Vec::with_capacity(width * height);
    for field in fields {
        bits.extend(decode_row(field, width)?);
    }
    Ok(BinaryRaster::new(bits, width, height))
}
