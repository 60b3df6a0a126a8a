use url::Url;

use crate::domain::{Article, SourceKind};
use crate::errors::{DigestError, DigestResult};
use crate::sources::syndication::{feed_items, FeedClient};
use crate::sources::traits::NewsSource;

const SEARCH_URL: &str = "https://news.google.com/rss/search";
const SOURCE_NAME: &str = "Google News";

/// Query-parameterized Google News search feed
pub struct GoogleNewsSource {
    client: FeedClient,
}

impl GoogleNewsSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    fn build_search_url(query: &str) -> DigestResult<String> {
        let url = Url::parse_with_params(
            SEARCH_URL,
            &[("q", query), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")],
        )
        .map_err(|e| DigestError::source_fetch(SourceKind::GoogleNews, e.to_string()))?;

        Ok(url.into())
    }

    /// Google appends the publisher to each headline: "Headline - Publisher"
    fn split_publisher(title: &str) -> Option<(&str, &str)> {
        let (headline, publisher) = title.rsplit_once(" - ")?;
        let (headline, publisher) = (headline.trim(), publisher.trim());

        if headline.is_empty() || publisher.is_empty() {
            return None;
        }

        Some((headline, publisher))
    }

    fn to_article(mut article: Article) -> Article {
        let split = Self::split_publisher(&article.title)
            .map(|(headline, publisher)| (headline.to_string(), publisher.to_string()));

        if let Some((headline, publisher)) = split {
            article.title = headline;
            article = article.with_source(publisher);
        }

        article
    }
}

impl NewsSource for GoogleNewsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::GoogleNews
    }

    fn fetch(&self, query: &str, limit: usize) -> DigestResult<Vec<Article>> {
        let url = Self::build_search_url(query)?;
        let feed = self.client.fetch_and_parse(&url)?;

        Ok(feed_items(feed, SOURCE_NAME)
            .into_iter()
            .take(limit)
            .map(|item| Self::to_article(item.article))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_encodes_query() {
        let url = GoogleNewsSource::build_search_url("electric vehicles & batteries").unwrap();

        assert!(url.starts_with("https://news.google.com/rss/search?q="));
        assert!(url.contains("q=electric+vehicles+%26+batteries"));
        assert!(url.contains("ceid=US%3Aen"));
    }

    #[test]
    fn test_split_publisher() {
        assert_eq!(
            GoogleNewsSource::split_publisher("EV sales climb - Reuters"),
            Some(("EV sales climb", "Reuters"))
        );
        assert_eq!(
            GoogleNewsSource::split_publisher("Self-driving - the next step - The Verge"),
            Some(("Self-driving - the next step", "The Verge"))
        );
        assert_eq!(GoogleNewsSource::split_publisher("No publisher here"), None);
    }

    #[test]
    fn test_to_article_moves_publisher_into_source() {
        let article = Article::new("EV sales climb - Reuters")
            .with_source(SOURCE_NAME)
            .with_url("https://news.google.com/articles/abc");

        let article = GoogleNewsSource::to_article(article);

        assert_eq!(article.title, "EV sales climb");
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.url, "https://news.google.com/articles/abc");
    }

    #[test]
    fn test_to_article_without_publisher_keeps_feed_name() {
        let article = GoogleNewsSource::to_article(Article::new("Plain").with_source(SOURCE_NAME));
        assert_eq!(article.title, "Plain");
        assert_eq!(article.source, "Google News");
    }
}
