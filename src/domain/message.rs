use chrono::{DateTime, FixedOffset};

use super::Article;

pub const DIGEST_SUBJECT: &str = "Your daily news digest";
const NO_SUMMARY: &str = "No summary available.";

/// A digest rendered for delivery, in plain text and HTML
#[derive(Debug, Clone)]
pub struct DigestMessage {
    pub subject: String,
    pub entries: Vec<DigestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published: Option<String>,
    pub text: String,
}

impl DigestEntry {
    pub fn from_article(article: &Article) -> Self {
        let text = article
            .summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| Some(article.content.as_str()).filter(|c| !c.trim().is_empty()))
            .unwrap_or(NO_SUMMARY)
            .to_string();

        Self {
            title: article.title.clone(),
            source: article.source.clone(),
            url: article.url.clone(),
            published: format_published(&article.published_at),
            text,
        }
    }

    /// "{source} | {published}" or just the source when undated
    fn byline(&self) -> String {
        match &self.published {
            Some(published) => format!("{} | {}", self.source, published),
            None => self.source.clone(),
        }
    }
}

impl DigestMessage {
    pub fn from_articles(articles: &[Article]) -> Self {
        Self {
            subject: DIGEST_SUBJECT.to_string(),
            entries: articles.iter().map(DigestEntry::from_article).collect(),
        }
    }

    pub fn text_body(&self) -> String {
        if self.entries.is_empty() {
            return NO_SUMMARY.to_string();
        }

        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut block = format!("{}. {}\n{}\n{}", i + 1, entry.title, entry.byline(), entry.text);
                if !entry.url.is_empty() {
                    block.push('\n');
                    block.push_str(&entry.url);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn html_body(&self) -> String {
        let mut html = String::from(
            "<!DOCTYPE html>\n<html>\n<body style=\"font-family: sans-serif; max-width: 640px; margin: 0 auto;\">\n",
        );
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.subject)));

        if self.entries.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", NO_SUMMARY));
        }

        for entry in &self.entries {
            html.push_str("<div style=\"margin-bottom: 24px;\">\n");
            if entry.url.is_empty() {
                html.push_str(&format!("<h2>{}</h2>\n", escape_html(&entry.title)));
            } else {
                html.push_str(&format!(
                    "<h2><a href=\"{}\">{}</a></h2>\n",
                    escape_html(&entry.url),
                    escape_html(&entry.title)
                ));
            }
            html.push_str(&format!(
                "<p style=\"color: #6b7280; font-size: 12px;\">{}</p>\n",
                escape_html(&entry.byline())
            ));
            html.push_str(&format!("<p>{}</p>\n", escape_html(&entry.text)));
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Human-readable publish date; unparseable values are shown as given
pub fn format_published(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed: Option<DateTime<FixedOffset>> = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok();

    Some(match parsed {
        Some(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        None => raw.to_string(),
    })
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_published_rfc3339() {
        assert_eq!(
            format_published("2024-03-05T14:30:00Z").as_deref(),
            Some("Mar 05, 2024 14:30")
        );
    }

    #[test]
    fn test_format_published_rfc2822() {
        assert_eq!(
            format_published("Thu, 28 Dec 2023 00:00:00 +0000").as_deref(),
            Some("Dec 28, 2023 00:00")
        );
    }

    #[test]
    fn test_format_published_unparseable_kept_raw() {
        assert_eq!(format_published("yesterday").as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_format_published_empty() {
        assert!(format_published("").is_none());
        assert!(format_published("   ").is_none());
    }

    #[test]
    fn test_entry_prefers_summary_then_content() {
        let with_summary = Article::new("t").with_content("body").with_summary("short");
        assert_eq!(DigestEntry::from_article(&with_summary).text, "short");

        let content_only = Article::new("t").with_content("body");
        assert_eq!(DigestEntry::from_article(&content_only).text, "body");

        let bare = Article::new("t");
        assert_eq!(DigestEntry::from_article(&bare).text, "No summary available.");
    }

    #[test]
    fn test_text_body() {
        let articles = vec![
            Article::new("Rust 2024 ships")
                .with_source("Rust Blog")
                .with_url("https://blog.rust-lang.org/")
                .with_published("not a date")
                .with_summary("The new edition is out."),
            Article::new("Second story").with_summary("More news."),
        ];

        let body = DigestMessage::from_articles(&articles).text_body();

        assert_eq!(
            body,
            "1. Rust 2024 ships\nRust Blog | not a date\nThe new edition is out.\nhttps://blog.rust-lang.org/\n\n\
             2. Second story\nUnknown\nMore news."
        );
    }

    #[test]
    fn test_empty_digest_text() {
        assert_eq!(DigestMessage::from_articles(&[]).text_body(), "No summary available.");
    }

    #[test]
    fn test_html_body_escapes_content() {
        let articles = vec![Article::new("Cats & <Dogs>")
            .with_url("https://example.com/?a=1&b=2")
            .with_summary("\"quoted\"")];

        let html = DigestMessage::from_articles(&articles).html_body();

        assert!(html.contains("Cats &amp; &lt;Dogs&gt;"));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("<h1>Your daily news digest</h1>"));
    }
}
