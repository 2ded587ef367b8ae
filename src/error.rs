use particle_bitmap::DecodeError;
use thiserror::Error;

use crate::services::feed::FeedError;
use crate::services::fetcher::FetchError;
use crate::services::image_pipeline::ImageError;

/// Top-level error for CLI commands
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Pixel data error: {0}")]
    Pixels(#[from] DecodeError),

    #[error("Document has no image")]
    NoImage,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Worker(e.to_string())
    }
}
