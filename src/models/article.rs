/// An article as extracted from its HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub byline: String,
    pub date: String,
    /// Body paragraphs, `_emphasis_` markup already applied
    pub paragraphs: Vec<String>,
    /// Absolute URLs of images inside the article body
    pub images: Vec<String>,
}
