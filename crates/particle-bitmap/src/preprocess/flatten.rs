//! Color normalization: composite onto an opaque background, then reduce to luma.
//!
//! Every input mode (palette, gray+alpha, RGBA, 16-bit, float) is first
//! widened to RGBA8 by the `image` crate, so one code path covers them all.

use image::DynamicImage;

use super::gray::GrayscaleRaster;

/// ITU-R 601-2 luma weights in 16.16 fixed point.
const LUMA_R: u32 = 19_595;
const LUMA_G: u32 = 38_470;
const LUMA_B: u32 = 7_471;

/// Composite one 8-bit channel over `background` with coverage `alpha`.
#[inline]
fn composite(channel: u8, alpha: u8, background: u8) -> u8 {
    let a = u32::from(alpha);
    let mixed = u32::from(channel) * a + u32::from(background) * (255 - a);
    ((mixed + 127) / 255) as u8
}

/// Reduce an RGB triple to a single intensity.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let l = LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b);
    ((l + 0x8000) >> 16) as u8
}

/// Flatten `img` onto a `background` gray level and convert it to a
/// [`GrayscaleRaster`] of the same dimensions.
pub fn flatten_to_gray(img: &DynamicImage, background: u8) -> GrayscaleRaster {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels = rgba
        .pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            luma(
                composite(r, a, background),
                composite(g, a, background),
                composite(b, a, background),
            )
        })
        .collect();

    GrayscaleRaster::new(pixels, width as usize, height as usize)
}
