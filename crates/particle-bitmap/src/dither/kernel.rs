//! Error diffusion kernel definitions.
//!
//! A kernel specifies how the quantization error of one pixel is
//! distributed to neighboring pixels that haven't been visited yet.

/// An error diffusion kernel.
///
/// Each entry specifies an offset `(dx, dy)` and a weight. A neighbor
/// receives `error * weight / divisor`. The total fraction propagated is
/// `sum(weights) / divisor`, which for Atkinson is below one.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (zero = current row, positive = below)
    /// - `weight`: numerator applied to the error
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
/// The remaining 25% is dropped, which keeps contrast from building up
/// and preserves fine detail on a 1-bit display.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};
