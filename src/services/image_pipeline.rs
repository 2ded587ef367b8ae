//! Image acquisition and conversion into pixel blocks.
//!
//! Every image runs through the same blocking steps: fetch or read the bytes,
//! decode, then hand the picture to the bitmap encoder. [`ImagePipeline::process_many`]
//! fans a batch out over tokio's blocking pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use particle_bitmap::{BitmapEncoder, BitmapError, PixelBlock};

use super::fetcher::{is_remote, FetchError, Fetcher};
use crate::models::{ImageConfig, ParticleDocument};

/// Title of single-image documents
pub const IMAGE_DOCUMENT_TITLE: &str = "Image";

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Bitmap(#[from] BitmapError),

    #[error("Worker failed: {0}")]
    Worker(String),
}

/// Converts image sources into pixel blocks with one shared encoder
#[derive(Debug, Clone, Default)]
pub struct ImagePipeline {
    encoder: BitmapEncoder,
}

impl ImagePipeline {
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            encoder: config.encoder(),
        }
    }

    /// Decode and convert an encoded image (PNG, JPEG, GIF, WebP, BMP)
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<PixelBlock, ImageError> {
        Ok(self.encoder.encode_bytes(bytes)?)
    }

    pub fn process_path(&self, path: &Path) -> Result<PixelBlock, ImageError> {
        let bytes = std::fs::read(path).map_err(|source| ImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.process_bytes(&bytes)
    }

    pub fn process_url(&self, fetcher: &Fetcher, url: &str) -> Result<PixelBlock, ImageError> {
        let bytes = fetcher.fetch_bytes(url)?;
        self.process_bytes(&bytes)
    }

    /// Convert an `http(s)` URL or a local file path
    pub fn process_source(&self, fetcher: &Fetcher, source: &str) -> Result<PixelBlock, ImageError> {
        if is_remote(source) {
            self.process_url(fetcher, source)
        } else {
            self.process_path(Path::new(source))
        }
    }

    /// Convert a batch of sources in parallel.
    ///
    /// Each source gets its own blocking task; results come back in input
    /// order. A source that fails is logged and yields `None`.
    pub async fn process_many(
        self: Arc<Self>,
        fetcher: Arc<Fetcher>,
        sources: Vec<String>,
    ) -> Vec<Option<PixelBlock>> {
        let handles: Vec<_> = sources
            .into_iter()
            .map(|source| {
                let pipeline = Arc::clone(&self);
                let fetcher = Arc::clone(&fetcher);
                tokio::task::spawn_blocking(move || {
                    let result = pipeline.process_source(&fetcher, &source);
                    (source, result)
                })
            })
            .collect();

        let mut blocks = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let outcome = match handle.await {
                Ok((source, Ok(block))) => {
                    tracing::debug!(index, %source, width = block.width, height = block.height, "Converted image");
                    Some(block)
                }
                Ok((source, Err(e))) => {
                    tracing::warn!(index, %source, error = %e, "Skipping image");
                    None
                }
                Err(e) => {
                    let e = ImageError::Worker(e.to_string());
                    tracing::warn!(index, error = %e, "Skipping image");
                    None
                }
            };
            blocks.push(outcome);
        }

        blocks
    }
}

/// Wrap a single block in its own document
pub fn image_document(block: PixelBlock) -> ParticleDocument {
    let mut doc = ParticleDocument::new(IMAGE_DOCUMENT_TITLE);
    doc.push_image(block);
    doc
}
