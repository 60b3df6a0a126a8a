pub mod traits;
pub mod syndication;
pub mod news_api;
pub mod rss_feeds;
pub mod google_news;
pub mod bing_news;
pub mod registry;
pub mod article_body;

pub use traits::NewsSource;
pub use registry::SourceRegistry;
pub use article_body::ArticleBodyFetcher;
