use tracing::info;

use crate::config::Config;
use crate::domain::SourceKind;
use crate::errors::DigestResult;
use crate::sources::syndication::FeedClient;
use crate::sources::traits::NewsSource;
use crate::sources::{
    bing_news::BingNewsSource, google_news::GoogleNewsSource, news_api::NewsApiSource,
    rss_feeds::RssFeedSource,
};

/// Ordered cascade of news sources, highest priority first
pub struct SourceRegistry {
    sources: Vec<Box<dyn NewsSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Build the standard cascade. The order is fixed: the structured API
    /// first, then the feed-based sources in fallback order.
    pub fn from_config(config: &Config) -> DigestResult<Self> {
        let client = FeedClient::new(config.http_timeout)?;
        let mut registry = Self::new();

        match &config.news_api_key {
            Some(key) => {
                registry.register(Box::new(NewsApiSource::new(client.http().clone(), key.clone())))
            }
            None => info!("NEWS_API_KEY not set, skipping {}", SourceKind::NewsApi),
        }

        registry.register(Box::new(RssFeedSource::new(client.clone())));
        registry.register(Box::new(GoogleNewsSource::new(client.clone())));
        registry.register(Box::new(BingNewsSource::new(client)));

        Ok(registry)
    }

    /// Append a source at the lowest priority
    pub fn register(&mut self, source: Box<dyn NewsSource>) {
        self.sources.push(source);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn NewsSource> {
        self.sources.iter().map(|s| s.as_ref())
    }

    pub fn kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
