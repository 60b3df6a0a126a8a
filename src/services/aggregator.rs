use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::Article;
use crate::sources::{ArticleBodyFetcher, SourceRegistry};

/// Source label of the article synthesized when every source came up empty
pub const PLACEHOLDER_SOURCE: &str = "System";

pub struct NewsAggregator {
    registry: SourceRegistry,
    body_fetcher: Option<ArticleBodyFetcher>,
}

impl NewsAggregator {
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            registry,
            body_fetcher: None,
        }
    }

    /// Fetch full article text for the selected articles whose blurb is short
    pub fn with_body_fetcher(mut self, fetcher: ArticleBodyFetcher) -> Self {
        self.body_fetcher = Some(fetcher);
        self
    }

    /// Run the source cascade and return at most `num_articles` articles
    /// with distinct normalized titles.
    ///
    /// Sources are consulted in priority order, each asked only for what is
    /// still missing; once enough candidates are collected the rest are
    /// skipped. A failing source counts as an empty one. When nothing at all
    /// was found a single placeholder article is returned instead.
    pub fn aggregate(&self, query: &str, num_articles: usize) -> Vec<Article> {
        let mut collected: Vec<Article> = Vec::new();

        for source in self.registry.iter() {
            if collected.len() >= num_articles {
                debug!(source = %source.kind(), "Enough articles collected, skipping source");
                continue;
            }

            let wanted = num_articles - collected.len();
            match source.fetch(query, wanted) {
                Ok(articles) => {
                    info!(
                        source = %source.kind(),
                        requested = wanted,
                        returned = articles.len(),
                        "Fetched articles"
                    );
                    collected.extend(articles);
                }
                Err(e) => {
                    warn!(source = %source.kind(), error = %e, "Source failed, continuing cascade");
                }
            }
        }

        if collected.is_empty() {
            warn!(query = %query, "No source returned articles, using placeholder");
            collected.push(placeholder_article(query));
        }

        let mut articles = dedup_by_title(collected);
        articles.truncate(num_articles);

        match &self.body_fetcher {
            Some(fetcher) => articles.into_iter().map(|a| fetcher.fill(a)).collect(),
            None => articles,
        }
    }
}

/// Keep the first article for every normalized title
pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();

    articles
        .into_iter()
        .filter(|article| {
            let key = article.title_key();
            if seen.insert(key) {
                true
            } else {
                debug!(title = %article.title, "Dropping duplicate article");
                false
            }
        })
        .collect()
}

pub fn placeholder_article(query: &str) -> Article {
    Article::new(format!("No recent news found for \"{}\"", query))
        .with_source(PLACEHOLDER_SOURCE)
        .with_summary(format!(
            "Sorry, none of our news sources returned articles about \"{}\" right now. \
             Please try again later or broaden your query.",
            query
        ))
}
