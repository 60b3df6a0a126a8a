use serde::Serialize;

use super::Article;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleBrief {
    pub title: String,
    pub source: String,
}

impl From<&Article> for ArticleBrief {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            source: article.source.clone(),
        }
    }
}

/// Structured outcome of a digest run; every request ends in one of these
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum DigestResponse {
    #[serde(rename = "digest sent")]
    Sent {
        article_count: usize,
        articles: Vec<ArticleBrief>,
    },
    #[serde(rename = "no articles found")]
    NoArticles { query: String },
    #[serde(rename = "error")]
    Error { message: String },
}

impl DigestResponse {
    pub fn sent(articles: &[Article]) -> Self {
        DigestResponse::Sent {
            article_count: articles.len(),
            articles: articles.iter().map(ArticleBrief::from).collect(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        DigestResponse::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DigestResponse::Error { .. })
    }
}
