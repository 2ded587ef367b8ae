//! End-to-end image conversion tests: encoded bytes in, particle documents out.

mod common;

use common::fixtures;
use image::ImageFormat;
use particle_bitmap::{BitmapError, BlockStyle};
use particle_news::models::{ContentItem, FetchConfig, ImageConfig, ParticleDocument};
use particle_news::services::{
    image_document, preview_image, read_document, write_document, Fetcher, ImageError,
    ImagePipeline,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_white_image_is_all_background() {
    let pipeline = ImagePipeline::new(&ImageConfig::default());
    let block = pipeline
        .process_bytes(&fixtures::png(&fixtures::white_image(600, 360)))
        .unwrap();

    assert_eq!((block.width, block.height), (300, 180));
    assert_eq!(block.pixels, " ".repeat(179));
    assert_eq!(block.style, BlockStyle::default());
}

#[test]
fn test_transparent_image_flattens_to_background() {
    let pipeline = ImagePipeline::default();
    let block = pipeline
        .process_bytes(&fixtures::png(&fixtures::transparent_image(40, 10)))
        .unwrap();

    assert_eq!((block.width, block.height), (40, 10));
    assert!(block.pixels.chars().all(|c| c == ' '));
}

#[test]
fn test_black_image_rows() {
    let pipeline = ImagePipeline::default();
    let block = pipeline
        .process_bytes(&fixtures::png(&fixtures::black_image(100, 3)))
        .unwrap();

    // 100 = 26 * 3 + 22
    assert_eq!(block.pixels, "ZZZV ZZZV ZZZV");
}

#[test]
fn test_bmp_input() {
    let bytes = fixtures::encode(&fixtures::black_image(2, 2), ImageFormat::Bmp);
    let block = ImagePipeline::default().process_bytes(&bytes).unwrap();
    assert_eq!(block.pixels, "B B");
}

#[test]
fn test_tall_image_fits_height() {
    let block = ImagePipeline::default()
        .process_bytes(&fixtures::png(&fixtures::white_image(400, 900)))
        .unwrap();
    assert_eq!((block.width, block.height), (80, 180));
    assert_eq!(block.pixels.split(' ').count(), 180);
}

#[test]
fn test_gradient_dithers_to_mixed_rows() {
    let block = ImagePipeline::default()
        .process_bytes(&fixtures::png(&fixtures::gradient_image(300, 20)))
        .unwrap();
    let raster = block.to_raster().unwrap();

    for y in 0..raster.height() {
        assert!(raster.is_ink(0, y), "black edge must be ink in row {y}");
        assert!(!raster.is_ink(299, y), "white edge must be background in row {y}");
    }

    let total = raster.width() * raster.height();
    let ink = raster.ink_count();
    assert!(
        ink * 100 > total * 30 && ink * 100 < total * 70,
        "expected roughly half ink, got {ink} of {total}"
    );
}

#[test]
fn test_corrupt_bytes_produce_no_block() {
    let err = ImagePipeline::default()
        .process_bytes(&[0x89, b'P', b'N', b'G', 0, 0])
        .unwrap_err();
    assert!(matches!(err, ImageError::Bitmap(BitmapError::Decode(_))));
}

#[test]
fn test_document_preview_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("image.json");

    let block = ImagePipeline::default()
        .process_bytes(&fixtures::png(&fixtures::gradient_image(64, 16)))
        .unwrap();
    write_document(&image_document(block.clone()), &json).unwrap();

    let doc: ParticleDocument = read_document(&json).unwrap();
    assert_eq!(doc.title, "Image");
    assert_eq!(doc.content, vec![ContentItem::Image(block.clone())]);

    let preview = preview_image(&doc).unwrap();
    let raster = block.to_raster().unwrap();
    assert_eq!(preview.dimensions(), (64, 16));
    assert_eq!(preview.as_raw(), &raster.to_luma());
}

#[test]
fn test_document_json_shape() {
    let block = ImagePipeline::default()
        .process_bytes(&fixtures::png(&fixtures::black_image(1, 1)))
        .unwrap();
    let value = serde_json::to_value(image_document(block)).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "format": "particle",
            "title": "Image",
            "content": [{
                "type": "image",
                "width": 1,
                "height": 1,
                "pixels": "A",
                "style": {"scale": 1, "margin-top": 8, "margin-bottom": 8}
            }]
        })
    );
}

#[tokio::test]
async fn test_process_many_keeps_order_and_skips_failures() {
    let dir = tempfile::tempdir().unwrap();
    let white = dir.path().join("white.png");
    let black = dir.path().join("black.png");
    std::fs::write(&white, fixtures::png(&fixtures::white_image(10, 4))).unwrap();
    std::fs::write(&black, fixtures::png(&fixtures::black_image(3, 1))).unwrap();

    let sources = vec![
        black.display().to_string(),
        dir.path().join("missing.png").display().to_string(),
        white.display().to_string(),
    ];

    let fetcher = tokio::task::spawn_blocking(|| Fetcher::new(&FetchConfig::default()))
        .await
        .unwrap()
        .unwrap();
    let pipeline = Arc::new(ImagePipeline::default());
    let blocks = pipeline.process_many(Arc::new(fetcher), sources).await;

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].as_ref().map(|b| b.pixels.as_str()), Some("C"));
    assert!(blocks[1].is_none());
    assert_eq!(
        blocks[2].as_ref().map(|b| (b.width, b.height)),
        Some((10, 4))
    );
}
