use std::path::Path;

use image::GrayImage;

use crate::error::AppError;
use crate::models::{Article, ArticleConfig, ParticleDocument};

const UNTITLED: &str = "Untitled";
const ELLIPSIS: &str = "...";

/// Build the text document for an article.
///
/// The article title leads as a `*bold*` paragraph, followed by a
/// `byline | date` line when either exists, then the body paragraphs.
pub fn convert_to_particle(article: &Article, config: &ArticleConfig) -> ParticleDocument {
    let mut doc = ParticleDocument::new(document_title(&article.title, config.title_max_len));

    if !article.title.is_empty() {
        doc.push_paragraph(format!("*{}*", article.title));
    }

    let metadata: Vec<&str> = [article.byline.as_str(), article.date.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !metadata.is_empty() {
        doc.push_paragraph(metadata.join(" | "));
    }

    let mut paragraphs = article.paragraphs.as_slice();
    if config.drop_last_paragraph {
        if let Some((_, rest)) = paragraphs.split_last() {
            paragraphs = rest;
        }
    }
    for paragraph in paragraphs.iter().filter(|p| !p.is_empty()) {
        doc.push_paragraph(paragraph.as_str());
    }

    doc
}

/// Shorten to `max_len` characters, then strip anything outside ASCII
fn document_title(title: &str, max_len: usize) -> String {
    if title.is_empty() {
        return UNTITLED.to_string();
    }

    let truncated: String = if title.chars().count() > max_len {
        let keep = max_len.saturating_sub(ELLIPSIS.len());
        title.chars().take(keep).chain(ELLIPSIS.chars()).collect()
    } else {
        title.to_string()
    };

    truncated.chars().filter(char::is_ascii).collect()
}

/// Write a document as pretty-printed UTF-8 JSON, creating parent directories
pub fn write_document(doc: &ParticleDocument, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut json = doc.to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json)?;

    tracing::info!(path = %path.display(), items = doc.content.len(), "Wrote document");
    Ok(())
}

pub fn read_document(path: &Path) -> Result<ParticleDocument, AppError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Decode the first image of a document back into a black and white picture
pub fn preview_image(doc: &ParticleDocument) -> Result<GrayImage, AppError> {
    let block = doc.images().next().ok_or(AppError::NoImage)?;
    let raster = block.to_raster()?;

    let width = u32::try_from(raster.width()).map_err(|e| AppError::PngEncode(e.to_string()))?;
    let height = u32::try_from(raster.height()).map_err(|e| AppError::PngEncode(e.to_string()))?;
    GrayImage::from_raw(width, height, raster.to_luma())
        .ok_or_else(|| AppError::PngEncode(format!("buffer does not fit {width}x{height}")))
}

/// Write the preview of a document's first image as a PNG
pub fn write_preview(doc: &ParticleDocument, path: &Path) -> Result<(), AppError> {
    let img = preview_image(doc)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AppError::PngEncode(e.to_string()))?;

    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "Wrote preview");
    Ok(())
}
