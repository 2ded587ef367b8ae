//! RSS feed ingest: list a feed's entries and turn each linked article into a
//! document.

use std::path::Path;

use super::article_parser::{html_to_paragraphs, parse_article};
use super::fetcher::{text_edition_url, Fetcher};
use super::particle_converter::{convert_to_particle, write_document};
use crate::error::AppError;
use crate::models::{ArticleConfig, ParticleDocument};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Invalid feed: {0}")]
    Parse(#[from] rss::Error),
}

/// One item of a feed; missing fields are empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: String,
    /// Entry description, usually an HTML fragment
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub entries: Vec<FeedEntry>,
}

/// Parse an RSS 2.0 document
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, FeedError> {
    let channel = rss::Channel::read_from(bytes)?;

    let entries = channel
        .items()
        .iter()
        .map(|item| FeedEntry {
            title: item.title().unwrap_or_default().trim().to_string(),
            link: item.link().unwrap_or_default().trim().to_string(),
            published: item.pub_date().unwrap_or_default().trim().to_string(),
            summary: item.description().unwrap_or_default().to_string(),
        })
        .collect();

    Ok(Feed {
        title: channel.title().trim().to_string(),
        entries,
    })
}

pub fn fetch_feed(fetcher: &Fetcher, url: &str) -> Result<Feed, AppError> {
    let bytes = fetcher.fetch_bytes(url)?;
    let feed = parse_feed(&bytes)?;
    tracing::info!(url, title = %feed.title, entries = feed.entries.len(), "Fetched feed");
    Ok(feed)
}

/// Overview document: each entry's bold title, date and summary, then a blank
/// separator paragraph.
pub fn feed_document(feed: &Feed) -> ParticleDocument {
    let title = if feed.title.is_empty() {
        "Feed"
    } else {
        feed.title.as_str()
    };
    let mut doc = ParticleDocument::new(title);

    for entry in &feed.entries {
        doc.push_paragraph(format!("*{}*", entry.title));
        if !entry.published.is_empty() {
            doc.push_paragraph(entry.published.as_str());
        }
        for paragraph in html_to_paragraphs(&entry.summary) {
            doc.push_paragraph(paragraph);
        }
        doc.push_paragraph("");
    }

    doc
}

/// Write `<output>/index.json` for the feed and `<output>/<n>/index.json` for
/// each of the first `limit` entries. Articles that fail to fetch are logged
/// and skipped. Returns the number of articles written.
pub fn write_feed(
    fetcher: &Fetcher,
    feed: &Feed,
    config: &ArticleConfig,
    output: &Path,
    limit: Option<usize>,
) -> Result<usize, AppError> {
    let entries = &feed.entries[..limit.unwrap_or(feed.entries.len()).min(feed.entries.len())];
    let listed = Feed {
        title: feed.title.clone(),
        entries: entries.to_vec(),
    };
    write_document(&feed_document(&listed), &output.join("index.json"))?;

    let mut written = 0;
    for (index, entry) in entries.iter().enumerate() {
        if entry.link.is_empty() {
            tracing::warn!(index, title = %entry.title, "Feed entry has no link");
            continue;
        }

        let url = text_edition_url(&entry.link);
        let html = match fetcher.fetch_text(&url) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(index, %url, error = %e, "Skipping article");
                continue;
            }
        };

        let doc = convert_to_particle(&parse_article(&html, &url), config);
        write_document(&doc, &output.join((index + 1).to_string()).join("index.json"))?;
        written += 1;
    }

    Ok(written)
}
