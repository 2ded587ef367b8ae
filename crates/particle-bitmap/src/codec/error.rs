//! Errors raised while reading encoded pixel data back.

use thiserror::Error;

/// Malformed pixel string.
///
/// Encoding never fails; only decoding foreign or corrupted data can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character outside `[A-Za-z]` inside an encoded row.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The runs of one row add up to more pixels than the row width.
    #[error("row overflows its width: {decoded} pixels decoded, width is {width}")]
    RowOverflow { width: usize, decoded: usize },

    /// The pixel string does not contain exactly one field per row.
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
}
