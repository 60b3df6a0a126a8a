/// Upstream a batch of articles came from, in cascade priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    NewsApi,
    RssFeeds,
    GoogleNews,
    BingNews,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::NewsApi => "news_api",
            SourceKind::RssFeeds => "rss_feeds",
            SourceKind::GoogleNews => "google_news",
            SourceKind::BingNews => "bing_news",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
