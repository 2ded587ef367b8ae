//! Per-row run-length text codec.
//!
//! A row is split into maximal runs of equal bits. Each run becomes one or
//! more letters: the letter's case gives the bit (upper = ink, lower =
//! background) and its position in the alphabet gives the length (A = 1,
//! Z = 26). Runs longer than 26 repeat `Z`/`z` for each full chunk and end
//! with one letter for the remainder.
//!
//! A background run that reaches the end of the row is omitted entirely, so
//! decoding needs the row width from the enclosing block.

use super::error::DecodeError;

/// Longest run a single letter can express.
pub const MAX_RUN: usize = 26;

/// Append the letters for one run of `len` pixels.
fn push_run(out: &mut String, len: usize, ink: bool) {
    let (base, full) = if ink { (b'A', 'Z') } else { (b'a', 'z') };

    for _ in 0..len / MAX_RUN {
        out.push(full);
    }
    let rem = len % MAX_RUN;
    if rem > 0 {
        out.push(char::from(base + rem as u8 - 1));
    }
}

/// Encode one row of bits (`true` = ink).
///
/// # Example
///
/// ```
/// use particle_bitmap::codec::encode_row;
///
/// assert_eq!(encode_row(&[true, false, true]), "AaA");
/// assert_eq!(encode_row(&[true, false, false, false]), "A");
/// assert_eq!(encode_row(&[false; 10]), "");
/// ```
pub fn encode_row(row: &[bool]) -> String {
    let mut out = String::new();
    let mut start = 0;

    while start < row.len() {
        let bit = row[start];
        let len = row[start..].iter().take_while(|&&b| b == bit).count();
        let end = start + len;

        // trailing background is implied by the row width
        if !(end == row.len() && !bit) {
            push_run(&mut out, len, bit);
        }
        start = end;
    }

    out
}

/// Decode one encoded row back to `width` bits.
///
/// Columns not covered by the encoded runs are background.
///
/// # Errors
///
/// - [`DecodeError::InvalidSymbol`] for any character outside `[A-Za-z]`
/// - [`DecodeError::RowOverflow`] if the runs add up to more than `width`
///
/// # Example
///
/// ```
/// use particle_bitmap::codec::decode_row;
///
/// assert_eq!(decode_row("B", 4).unwrap(), vec![true, true, false, false]);
/// ```
pub fn decode_row(encoded: &str, width: usize) -> Result<Vec<bool>, DecodeError> {
    let mut row = Vec::with_capacity(width);

    for (position, symbol) in encoded.chars().enumerate() {
        let (ink, len) = match symbol {
            'A'..='Z' => (true, (symbol as u8 - b'A') as usize + 1),
            'a'..='z' => (false, (symbol as u8 - b'a') as usize + 1),
            _ => return Err(DecodeError::InvalidSymbol { symbol, position }),
        };

        if row.len() + len > width {
            return Err(DecodeError::RowOverflow {
                width,
                decoded: row.len() + len,
            });
        }
        row.resize(row.len() + len, ink);
    }

    row.resize(width, false);
    Ok(row)
}
