use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::blocking::Client;
use scraper::Html;

use crate::domain::Article;
use crate::errors::{DigestError, DigestResult};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; newsdigest/0.1)";

/// An article together with the parsed date used for ordering
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub published: Option<DateTime<Utc>>,
    pub article: Article,
}

/// Shared HTTP + parsing plumbing for every feed-backed source
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> DigestResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    pub fn fetch_bytes(&self, url: &str) -> DigestResult<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    pub fn fetch_text(&self, url: &str) -> DigestResult<String> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }

    pub fn fetch_and_parse(&self, url: &str) -> DigestResult<feed_rs::model::Feed> {
        parse_bytes(&self.fetch_bytes(url)?)
    }
}

pub fn parse_bytes(bytes: &[u8]) -> DigestResult<feed_rs::model::Feed> {
    parser::parse(bytes).map_err(|e| DigestError::FeedParse(e.to_string()))
}

/// Map feed entries to articles, keeping the feed's entry order.
/// Entries without a usable title are dropped.
pub fn feed_items(feed: feed_rs::model::Feed, source_name: &str) -> Vec<FeedItem> {
    feed.entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry
                .title
                .map(|t| decode_title(&t.content))
                .filter(|t| !t.is_empty())?;

            let url = entry
                .links
                .into_iter()
                .next()
                .map(|l| l.href)
                .unwrap_or_default();

            let published = entry.published.or(entry.updated);

            let content = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .map(|html| html_to_text(&html))
                .unwrap_or_default();

            let article = Article::new(title)
                .with_source(source_name)
                .with_url(url)
                .with_published(published.map(|dt| dt.to_rfc3339()).unwrap_or_default())
                .with_content(content);

            Some(FeedItem { published, article })
        })
        .collect()
}

/// Titles are plain text: resolve character references, keep literal
/// angle brackets such as "Vec<T>"
fn decode_title(title: &str) -> String {
    html_to_text(&title.replace('<', "&lt;"))
}

/// Extract plain text from HTML content, preserving word boundaries
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(text_node) = node.value().as_text() {
            text.push_str(text_node);
        }
        // Add space after block elements to preserve word boundaries
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "p" | "br" | "div" | "li" => text.push(' '),
                _ => {}
            }
        }
    }

    // Collapse whitespace and trim
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
