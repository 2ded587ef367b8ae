use particle_bitmap::PixelBlock;
use serde::{Deserialize, Serialize};

/// Value of the `format` field of every document
pub const PARTICLE_FORMAT: &str = "particle";

/// A complete particle document, the unit a viewer loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleDocument {
    pub format: String,
    pub title: String,
    pub content: Vec<ContentItem>,
}

/// One entry of a document's content list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Paragraph { text: String },
    Image(PixelBlock),
}

impl ParticleDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            format: PARTICLE_FORMAT.to_string(),
            title: title.into(),
            content: Vec::new(),
        }
    }

    pub fn push_paragraph(&mut self, text: impl Into<String>) {
        self.content.push(ContentItem::Paragraph { text: text.into() });
    }

    pub fn push_image(&mut self, block: PixelBlock) {
        self.content.push(ContentItem::Image(block));
    }

    /// All image blocks, in document order
    pub fn images(&self) -> impl Iterator<Item = &PixelBlock> {
        self.content.iter().filter_map(|item| match item {
            ContentItem::Image(block) => Some(block),
            ContentItem::Paragraph { .. } => None,
        })
    }

    /// Pretty-printed JSON (two-space indent, non-ASCII kept as is)
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
