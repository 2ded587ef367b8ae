//! Test fixtures: sample pages and generated images.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Article page with metadata, emphasis, images and trailing fine print
pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Rivers return | Example News</title></head>
<body>
  <nav><p>Home | World | Science</p></nav>
  <article>
    <h1>Rivers return to the plains</h1>
    <div class="byline">By Jane Doe</div>
    <time>May 1, 2024</time>
    <p>After a decade of drought, the rivers are <em>back</em>.</p>
    <p>Farmers call it a <i>second chance</i>.</p>
    <img src="/images/river.png" alt="River">
    <img src="/images/missing.png" alt="Missing">
    <p>Copyright Example News. All rights reserved.</p>
  </article>
</body>
</html>"#;

/// RSS document whose items link to `base` (the mock server URL)
pub fn rss_feed(base: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example News</title>
    <link>{base}/</link>
    <description>Latest stories</description>
    <item>
      <title>Rivers return</title>
      <link>{base}/world/rivers</link>
      <pubDate>Wed, 01 May 2024 10:00:00 GMT</pubDate>
      <description><![CDATA[<p>Rain came <em>early</em>.</p>]]></description>
    </item>
    <item>
      <title>Gone story</title>
      <link>{base}/world/gone</link>
      <pubDate>Thu, 02 May 2024 08:30:00 GMT</pubDate>
    </item>
    <item>
      <title>Third story</title>
      <link>{base}/world/third</link>
    </item>
  </channel>
</rss>"#
    )
}

/// Encode an image in the given container format
pub fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .expect("Failed to encode fixture image");
    bytes
}

/// Solid white RGB image
pub fn white_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 255, 255])))
}

/// Solid black RGB image
pub fn black_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([0, 0, 0])))
}

/// Fully transparent black RGBA image; flattens to pure background
pub fn transparent_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
}

/// Horizontal gradient from black to white
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
        Rgb([v, v, v])
    }))
}

pub fn png(img: &DynamicImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}
