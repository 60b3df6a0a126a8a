use tracing::{error, info, warn};

use crate::delivery::DigestSink;
use crate::domain::{Article, DigestQuery, DigestResponse};
use crate::errors::DigestResult;
use crate::services::aggregator::NewsAggregator;
use crate::summarizer::SummarizationGateway;

pub struct DigestService<S: DigestSink> {
    aggregator: NewsAggregator,
    summarizer: SummarizationGateway,
    sink: S,
}

impl<S: DigestSink> DigestService<S> {
    pub fn new(aggregator: NewsAggregator, summarizer: SummarizationGateway, sink: S) -> Self {
        Self {
            aggregator,
            summarizer,
            sink,
        }
    }

    /// Aggregate and summarize without delivering
    pub fn compose(&self, query: &DigestQuery) -> DigestResult<Vec<Article>> {
        query.validate_search()?;

        let articles = self.aggregator.aggregate(&query.query, query.num_articles);
        Ok(self.summarize_all(articles))
    }

    /// Full digest run. Never fails: every outcome, including delivery
    /// problems, is reported as a `DigestResponse`.
    pub fn run(&self, query: &DigestQuery) -> DigestResponse {
        if let Err(e) = query.validate() {
            warn!(error = %e, "Rejected digest request");
            return DigestResponse::error(e.to_string());
        }

        info!(query = %query.query, num_articles = query.num_articles, "Building digest");

        let articles = self.aggregator.aggregate(&query.query, query.num_articles);
        if articles.is_empty() {
            return DigestResponse::NoArticles {
                query: query.query.clone(),
            };
        }

        let articles = self.summarize_all(articles);

        match self.sink.deliver(&query.recipient, &articles) {
            Ok(()) => {
                info!(recipient = %query.recipient, articles = articles.len(), "Digest delivered");
                DigestResponse::sent(&articles)
            }
            Err(e) => {
                error!(recipient = %query.recipient, error = %e, "Digest delivery failed");
                DigestResponse::error(e.to_string())
            }
        }
    }

    fn summarize_all(&self, articles: Vec<Article>) -> Vec<Article> {
        articles
            .into_iter()
            .map(|article| {
                if article.needs_summary() {
                    let summary = self.summarizer.summarize(&article.content);
                    article.with_summary(summary)
                } else {
                    article
                }
            })
            .collect()
    }
}
