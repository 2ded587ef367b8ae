//! Extracts article metadata, paragraphs and image URLs from an HTML page.

use reqwest::Url;
use scraper::{ElementRef, Html, Node, Selector};

use crate::models::Article;

const TITLE_SELECTORS: &[&str] = &["h1", "title"];
const BYLINE_SELECTORS: &[&str] = &[".byline", "span.author"];
const DATE_SELECTORS: &[&str] = &["time", ".date"];
const BODY_SELECTORS: &[&str] = &["article", "div.story-body", "div.body"];

/// Parse an article page.
///
/// Missing pieces stay empty rather than failing: a page with no recognizable
/// structure still yields every non-blank `p` in the document.
pub fn parse_article(html: &str, url: &str) -> Article {
    let doc = Html::parse_document(html);

    let body = BODY_SELECTORS
        .iter()
        .find_map(|css| first_match(&doc, css))
        .unwrap_or_else(|| doc.root_element());

    let article = Article {
        url: url.to_string(),
        title: first_text(&doc, TITLE_SELECTORS),
        byline: first_text(&doc, BYLINE_SELECTORS),
        date: first_text(&doc, DATE_SELECTORS),
        paragraphs: paragraphs(body),
        images: image_urls(body, url),
    };

    tracing::debug!(
        url,
        title = %article.title,
        paragraphs = article.paragraphs.len(),
        images = article.images.len(),
        "Parsed article"
    );

    article
}

fn first_match<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}

/// Text of the first element matched by the earliest selector that has any
fn first_text(doc: &Html, selectors: &[&str]) -> String {
    selectors
        .iter()
        .filter_map(|css| first_match(doc, css))
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Split an HTML fragment (e.g. a feed summary) into formatted paragraphs.
///
/// Fragments without `p` elements become a single paragraph of their text.
pub fn html_to_paragraphs(fragment: &str) -> Vec<String> {
    let html = Html::parse_fragment(fragment);
    let root = html.root_element();

    let found = paragraphs(root);
    if !found.is_empty() {
        return found;
    }

    let mut text = String::new();
    push_formatted(root, &mut text);
    let text = collapse_whitespace(&text);
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text]
    }
}

fn paragraphs(body: ElementRef<'_>) -> Vec<String> {
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };

    body.select(&selector)
        .map(|p| {
            let mut text = String::new();
            push_formatted(p, &mut text);
            collapse_whitespace(&text)
        })
        .filter(|text| !text.is_empty())
        .collect()
}

/// Append the text under `element`, wrapping emphasized spans as `_text_`
fn push_formatted(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if matches!(el.name(), "em" | "i") => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let inner: String = child.text().collect();
                if !inner.trim().is_empty() {
                    out.push('_');
                    out.push_str(inner.trim());
                    out.push('_');
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_formatted(child, out);
                }
            }
            _ => {}
        }
    }
}

fn image_urls(body: ElementRef<'_>, page_url: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse("img[src]") else {
        return Vec::new();
    };
    let base = Url::parse(page_url).ok();

    let mut urls: Vec<String> = Vec::new();
    for img in body.select(&selector) {
        let Some(src) = img.value().attr("src").map(str::trim) else {
            continue;
        };
        let resolved = match &base {
            Some(base) => base.join(src),
            None => Url::parse(src),
        };
        match resolved {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                let url = url.to_string();
                if !urls.contains(&url) {
                    urls.push(url);
                }
            }
            Ok(url) => tracing::debug!(%url, "Skipping non-HTTP image"),
            Err(e) => tracing::debug!(src, %e, "Skipping unresolvable image"),
        }
    }
    urls
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Site title</title></head>
<body>
  <p>Navigation text outside the article</p>
  <article>
    <h1>  Rivers return
      to the plains </h1>
    <span class="byline">By Jane Doe</span>
    <time datetime="2024-05-01">May 1, 2024</time>
    <p>First paragraph.</p>
    <p>   </p>
    <p>A <em>remarkable</em> turn of <i>events</i>.</p>
    <p>Nested <a href="/x">link <b>text</b></a> stays.</p>
    <img src="/images/river.jpg">
    <img src="https://cdn.example.com/b.png">
    <img src="data:image/png;base64,AAAA">
    <p>Fine print.</p>
  </article>
</body>
</html>"#;

    #[test]
    fn test_parse_metadata() {
        let article = parse_article(PAGE, "https://news.example.com/world/story");

        assert_eq!(article.url, "https://news.example.com/world/story");
        assert_eq!(article.title, "Rivers return to the plains");
        assert_eq!(article.byline, "By Jane Doe");
        assert_eq!(article.date, "May 1, 2024");
    }

    #[test]
    fn test_parse_paragraphs_from_article_body() {
        let article = parse_article(PAGE, "https://news.example.com/world/story");

        assert_eq!(
            article.paragraphs,
            vec![
                "First paragraph.",
                "A _remarkable_ turn of _events_.",
                "Nested link text stays.",
                "Fine print.",
            ]
        );
    }

    #[test]
    fn test_parse_images_resolved() {
        let article = parse_article(PAGE, "https://news.example.com/world/story");

        assert_eq!(
            article.images,
            vec![
                "https://news.example.com/images/river.jpg",
                "https://cdn.example.com/b.png",
            ]
        );
    }

    #[test]
    fn test_title_falls_back_to_title_tag() {
        let html = "<html><head><title> Only title </title></head><body><p>x</p></body></html>";
        let article = parse_article(html, "https://example.com/");
        assert_eq!(article.title, "Only title");
    }

    #[test]
    fn test_story_body_fallback() {
        let html = r#"<html><body>
            <p>outside</p>
            <div class="story-body"><p>inside</p></div>
        </body></html>"#;
        let article = parse_article(html, "https://example.com/");
        assert_eq!(article.paragraphs, vec!["inside"]);
    }

    #[test]
    fn test_whole_document_fallback() {
        let html = "<html><body><p>one</p><div><p>two</p></div></body></html>";
        let article = parse_article(html, "https://example.com/");
        assert_eq!(article.paragraphs, vec!["one", "two"]);
        assert!(article.title.is_empty());
        assert!(article.byline.is_empty());
        assert!(article.date.is_empty());
    }

    #[test]
    fn test_author_and_date_class_fallbacks() {
        let html = r#"<html><body>
            <span class="author">A. Writer</span>
            <div class="date">Yesterday</div>
        </body></html>"#;
        let article = parse_article(html, "https://example.com/");
        assert_eq!(article.byline, "A. Writer");
        assert_eq!(article.date, "Yesterday");
    }

    #[test]
    fn test_empty_emphasis_dropped() {
        let html = "<article><p>Before<em> </em>after</p></article>";
        let article = parse_article(html, "https://example.com/");
        assert_eq!(article.paragraphs, vec!["Beforeafter"]);
    }

    #[test]
    fn test_html_to_paragraphs() {
        assert_eq!(
            html_to_paragraphs("<p>One <i>two</i></p><p> </p><p>Three</p>"),
            vec!["One _two_", "Three"]
        );
        assert_eq!(
            html_to_paragraphs("Plain <b>summary</b> text"),
            vec!["Plain summary text"]
        );
        assert!(html_to_paragraphs("  ").is_empty());
    }

    #[test]
    fn test_paragraph_whitespace_collapsed() {
        let html = "<article><p>  Line one\n    continues   <em>  very\n loudly </em>  here. </p></article>";
        let article = parse_article(html, "https://example.com/");
        assert_eq!(article.paragraphs, vec!["Line one continues _very loudly_ here."]);
    }

    #[test]
    fn test_relative_images_without_base_are_skipped() {
        let html = r#"<article><img src="a.png"><img src="http://x.test/b.png"></article>"#;
        let article = parse_article(html, "not a url");
        assert_eq!(article.images, vec!["http://x.test/b.png"]);
    }

    #[test]
    fn test_duplicate_images_collapsed() {
        let html = r#"<article><img src="/a.png"><img src="/a.png"></article>"#;
        let article = parse_article(html, "https://example.com/story");
        assert_eq!(article.images, vec!["https://example.com/a.png"]);
    }
}
