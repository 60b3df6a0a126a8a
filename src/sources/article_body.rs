use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::Article;
use crate::sources::syndication::FeedClient;
use crate::summarizer::extractive::SHORT_TEXT_THRESHOLD;

/// Follows article links to replace feed blurbs with the page's own text
pub struct ArticleBodyFetcher {
    client: FeedClient,
}

impl ArticleBodyFetcher {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    /// Swap a short blurb for the linked page's paragraph text.
    ///
    /// Articles that already carry a summary, have enough text, or have no
    /// http(s) link are returned untouched. Fetch failures and pages without
    /// more text than the blurb keep the blurb.
    pub fn fill(&self, article: Article) -> Article {
        if !Self::wants_body(&article) {
            return article;
        }

        let html = match self.client.fetch_text(&article.url) {
            Ok(html) => html,
            Err(e) => {
                debug!(url = %article.url, error = %e, "Keeping feed blurb");
                return article;
            }
        };

        let body = extract_paragraphs(&html);
        if body.chars().count() > article.content.chars().count() {
            article.with_content(body)
        } else {
            article
        }
    }

    fn wants_body(article: &Article) -> bool {
        article.summary.is_none()
            && article.content.chars().count() < SHORT_TEXT_THRESHOLD
            && (article.url.starts_with("http://") || article.url.starts_with("https://"))
    }
}

/// Text of every non-empty `<p>` element, joined by single spaces
fn extract_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
