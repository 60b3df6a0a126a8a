use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::{Article, SourceKind};
use crate::errors::{DigestError, DigestResult};
use crate::sources::syndication::{feed_items, parse_bytes, FeedClient};
use crate::sources::traits::NewsSource;

const SEARCH_URL: &str = "https://www.bing.com/news/search";
const SOURCE_NAME: &str = "Bing News";

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item\b.*?</item>").expect("item pattern is valid"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<link>(.*?)</link>").expect("link pattern is valid"));
static PUBLISHER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)<News:Source>(.*?)</News:Source>").expect("publisher pattern is valid")
});

/// Last-resort search feed, consulted only when the other sources came up short
pub struct BingNewsSource {
    client: FeedClient,
}

impl BingNewsSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    fn build_search_url(query: &str) -> DigestResult<String> {
        let url = Url::parse_with_params(SEARCH_URL, &[("q", query), ("format", "rss")])
            .map_err(|e| DigestError::source_fetch(SourceKind::BingNews, e.to_string()))?;

        Ok(url.into())
    }

    fn parse_results(bytes: &[u8], limit: usize) -> DigestResult<Vec<Article>> {
        let feed = parse_bytes(bytes)?;
        let publishers = publishers_by_link(&String::from_utf8_lossy(bytes));

        Ok(feed_items(feed, SOURCE_NAME)
            .into_iter()
            .take(limit)
            .map(|item| match publishers.get(&item.article.url) {
                Some(publisher) => item.article.with_source(publisher.clone()),
                None => item.article,
            })
            .collect())
    }
}

/// Bing names each item's publisher in a `News:Source` element that generic
/// feed parsers drop, so it is read from the raw XML and keyed by item link
fn publishers_by_link(xml: &str) -> HashMap<String, String> {
    ITEM_RE
        .find_iter(xml)
        .filter_map(|item| {
            let item = item.as_str();
            let link = LINK_RE.captures(item)?.get(1)?.as_str();
            let publisher = PUBLISHER_RE.captures(item)?.get(1)?.as_str();

            let publisher = element_text(publisher);
            if publisher.is_empty() {
                return None;
            }
            Some((normalize_link(&element_text(link)), publisher))
        })
        .collect()
}

/// Serialize absolute links the way the feed parser stores them
fn normalize_link(link: &str) -> String {
    Url::parse(link)
        .map(String::from)
        .unwrap_or_else(|_| link.to_string())
}

fn element_text(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw
        .strip_prefix("<![CDATA[")
        .and_then(|r| r.strip_suffix("]]>"))
        .map(str::to_string)
        .unwrap_or_else(|| {
            raw.replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&apos;", "'")
                .replace("&amp;", "&")
        });

    raw.trim().to_string()
}

impl NewsSource for BingNewsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::BingNews
    }

    fn fetch(&self, query: &str, limit: usize) -> DigestResult<Vec<Article>> {
        let url = Self::build_search_url(query)?;
        let bytes = self.client.fetch_bytes(&url)?;

        Self::parse_results(&bytes, limit)
    }
}
