use std::sync::LazyLock;

use regex::Regex;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{Article, SourceKind};
use crate::errors::{DigestError, DigestResult};
use crate::sources::traits::NewsSource;

const EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";
/// Largest page the API accepts
const MAX_PAGE_SIZE: usize = 100;
/// Placeholder title NewsAPI uses for withdrawn articles
const REMOVED_TITLE: &str = "[Removed]";

static TRUNCATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(…|\.\.\.)?\s*\[\+\d+ chars\]\s*$").expect("truncation pattern is valid")
});

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    articles: Vec<ApiArticle>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiArticle {
    title: Option<String>,
    source: Option<ApiSource>,
    url: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSource {
    name: Option<String>,
}

/// Structured search API; the highest-trust source in the cascade
pub struct NewsApiSource {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl NewsApiSource {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(client, EVERYTHING_URL, api_key)
    }

    fn with_endpoint(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn parse_response(body: &str) -> DigestResult<Vec<Article>> {
        let response: EverythingResponse = serde_json::from_str(body)?;

        if response.status != "ok" {
            return Err(DigestError::source_fetch(
                SourceKind::NewsApi,
                response
                    .message
                    .unwrap_or_else(|| format!("status {}", response.status)),
            ));
        }

        Ok(response
            .articles
            .into_iter()
            .filter_map(Self::to_article)
            .collect())
    }

    fn to_article(entry: ApiArticle) -> Option<Article> {
        let title = entry
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && t != REMOVED_TITLE)?;

        let content = entry
            .content
            .map(|c| strip_truncation_marker(&c))
            .filter(|c| !c.is_empty())
            .or(entry.description)
            .unwrap_or_default();

        Some(
            Article::new(title)
                .with_source(entry.source.and_then(|s| s.name).unwrap_or_default())
                .with_url(entry.url.unwrap_or_default())
                .with_published(entry.published_at.unwrap_or_default())
                .with_content(content),
        )
    }
}

/// NewsAPI cuts `content` short and appends "[+1234 chars]"
fn strip_truncation_marker(content: &str) -> String {
    TRUNCATION_MARKER.replace(content, "").trim().to_string()
}

impl NewsSource for NewsApiSource {
    fn kind(&self) -> SourceKind {
        SourceKind::NewsApi
    }

    fn fetch(&self, query: &str, limit: usize) -> DigestResult<Vec<Article>> {
        let page_size = limit.clamp(1, MAX_PAGE_SIZE).to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            // Error bodies carry a JSON message worth surfacing in the log
            let message = serde_json::from_str::<EverythingResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(DigestError::source_fetch(self.kind(), message));
        }

        let mut articles = Self::parse_response(&body)?;
        articles.truncate(limit);
        Ok(articles)
    }
}
