pub mod article_parser;
pub mod feed;
pub mod fetcher;
pub mod image_pipeline;
pub mod particle_converter;

pub use article_parser::{html_to_paragraphs, parse_article};
pub use feed::{feed_document, fetch_feed, parse_feed, write_feed, Feed, FeedEntry, FeedError};
pub use fetcher::{is_remote, text_edition_url, FetchError, Fetcher};
pub use image_pipeline::{image_document, ImageError, ImagePipeline};
pub use particle_converter::{
    convert_to_particle, preview_image, read_document, write_document, write_preview,
};
