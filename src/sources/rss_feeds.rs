use tracing::{debug, warn};

use crate::domain::{Article, SourceKind};
use crate::errors::{DigestError, DigestResult};
use crate::sources::syndication::{feed_items, FeedClient, FeedItem};
use crate::sources::traits::NewsSource;

/// Syndication feeds polled on every request, as (publisher, feed URL)
pub const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("BBC News", "https://feeds.bbci.co.uk/news/rss.xml"),
    ("NPR", "https://feeds.npr.org/1001/rss.xml"),
    ("The Guardian", "https://www.theguardian.com/world/rss"),
    ("Al Jazeera", "https://www.aljazeera.com/xml/rss/all.xml"),
    ("Ars Technica", "https://feeds.arstechnica.com/arstechnica/index"),
    ("TechCrunch", "https://techcrunch.com/feed/"),
];

/// Aggregates a fixed list of general news feeds. Unlike the search-backed
/// sources these feeds are not query specific, so entries are filtered
/// locally for relevance.
pub struct RssFeedSource {
    client: FeedClient,
    feeds: Vec<(String, String)>,
}

impl RssFeedSource {
    pub fn new(client: FeedClient) -> Self {
        Self::with_feeds(
            client,
            DEFAULT_FEEDS
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        )
    }

    pub fn with_feeds(client: FeedClient, feeds: Vec<(String, String)>) -> Self {
        Self { client, feeds }
    }
}

/// True when any lower-cased query term occurs inside the title or summary
pub fn is_relevant(article: &Article, terms: &[String]) -> bool {
    let title = article.title.to_lowercase();
    let summary = article.content.to_lowercase();

    terms
        .iter()
        .any(|term| title.contains(term.as_str()) || summary.contains(term.as_str()))
}

pub fn query_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Keep relevant items, newest first (undated last), at most `limit`
pub fn select_relevant(items: Vec<FeedItem>, query: &str, limit: usize) -> Vec<Article> {
    let terms = query_terms(query);

    let mut relevant: Vec<FeedItem> = items
        .into_iter()
        .filter(|item| is_relevant(&item.article, &terms))
        .collect();

    // Stable sort keeps feed order among equal dates
    relevant.sort_by(|a, b| b.published.cmp(&a.published));

    relevant
        .into_iter()
        .take(limit)
        .map(|item| item.article)
        .collect()
}

impl NewsSource for RssFeedSource {
    fn kind(&self) -> SourceKind {
        SourceKind::RssFeeds
    }

    fn fetch(&self, query: &str, limit: usize) -> DigestResult<Vec<Article>> {
        let mut items = Vec::new();
        let mut failures = 0;

        for (name, url) in &self.feeds {
            match self.client.fetch_and_parse(url) {
                Ok(feed) => {
                    let parsed = feed_items(feed, name);
                    debug!(feed = %name, entries = parsed.len(), "Parsed feed");
                    items.extend(parsed);
                }
                Err(e) => {
                    failures += 1;
                    warn!(feed = %name, url = %url, error = %e, "Skipping feed");
                }
            }
        }

        if !self.feeds.is_empty() && failures == self.feeds.len() {
            return Err(DigestError::source_fetch(
                self.kind(),
                format!("all {} feeds failed", failures),
            ));
        }

        Ok(select_relevant(items, query, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::syndication::{parse_bytes, tests::SAMPLE_RSS};
    use crate::test_support::{serve_once, UNREACHABLE_URL};

    fn source_with(feeds: &[(&str, &str)]) -> RssFeedSource {
        let client = FeedClient::new(std::time::Duration::from_secs(5)).unwrap();
        RssFeedSource::with_feeds(
            client,
            feeds
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        )
    }

    fn sample_items() -> Vec<FeedItem> {
        feed_items(parse_bytes(SAMPLE_RSS).unwrap(), "World Desk")
    }

    #[test]
    fn test_query_terms_split_and_lowercased() {
        assert_eq!(query_terms("Electric  VEHICLES"), vec!["electric", "vehicles"]);
    }

    #[test]
    fn test_relevance_matches_title() {
        let article = Article::new("Electric vehicles outsell petrol cars");
        assert!(is_relevant(&article, &query_terms("electric vehicles")));
    }

    #[test]
    fn test_relevance_matches_summary() {
        let article = Article::new("Norway sales record").with_content("Most new cars were ELECTRIC.");
        assert!(is_relevant(&article, &query_terms("electric")));
    }

    #[test]
    fn test_relevance_is_substring_match() {
        // raw substring matching, so "car" also matches "scarce"
        let article = Article::new("Water is scarce this summer");
        assert!(is_relevant(&article, &query_terms("car")));
    }

    #[test]
    fn test_irrelevant_entry_rejected() {
        let article = Article::new("Central bank holds rates").with_content("Borrowing unchanged.");
        assert!(!is_relevant(&article, &query_terms("electric vehicles")));
    }

    #[test]
    fn test_select_relevant_filters_and_orders() {
        let articles = select_relevant(sample_items(), "electric", 10);

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Electric vehicles outsell petrol cars in Norway",
                "Charging network expands along highways",
            ]
        );
    }

    #[test]
    fn test_select_relevant_newest_first() {
        // "rates" story is newer than the EV story; the undated story sorts last
        let articles = select_relevant(sample_items(), "electric rates", 10);

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Central bank holds rates steady",
                "Electric vehicles outsell petrol cars in Norway",
                "Charging network expands along highways",
            ]
        );
    }

    #[test]
    fn test_select_relevant_respects_limit() {
        let articles = select_relevant(sample_items(), "electric rates", 1);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Central bank holds rates steady");
    }

    #[test]
    fn test_default_feeds_are_https_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, url) in DEFAULT_FEEDS {
            assert!(url.starts_with("https://"), "feed {} should use https", name);
            assert!(seen.insert(url), "duplicate feed url {}", url);
        }
    }

    #[test]
    fn test_kind() {
        let client = FeedClient::new(std::time::Duration::from_secs(1)).unwrap();
        assert_eq!(RssFeedSource::new(client).kind(), SourceKind::RssFeeds);
    }

    #[test]
    fn test_every_feed_failing_is_source_error() {
        let source = source_with(&[("Dead One", UNREACHABLE_URL), ("Dead Two", UNREACHABLE_URL)]);

        match source.fetch("electric", 5) {
            Err(DigestError::SourceFetch { source_kind, message }) => {
                assert_eq!(source_kind, SourceKind::RssFeeds);
                assert!(message.contains("2 feeds"));
            }
            other => panic!("expected source error, got {:?}", other),
        }
    }

    #[test]
    fn test_failing_feed_skipped_when_another_succeeds() {
        let live = serve_once(200, "application/rss+xml", SAMPLE_RSS);
        let source = source_with(&[("Dead Desk", UNREACHABLE_URL), ("World Desk", live.as_str())]);

        let articles = source.fetch("electric", 5).unwrap();

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Electric vehicles outsell petrol cars in Norway",
                "Charging network expands along highways",
            ]
        );
        assert!(articles.iter().all(|a| a.source == "World Desk"));
    }

    #[test]
    fn test_unparseable_feed_counts_as_failure() {
        let broken = serve_once(200, "text/html", "<html>maintenance</html>");
        let source = source_with(&[("Broken Desk", broken.as_str())]);

        assert!(matches!(
            source.fetch("electric", 5),
            Err(DigestError::SourceFetch { source_kind: SourceKind::RssFeeds, .. })
        ));
    }
}
