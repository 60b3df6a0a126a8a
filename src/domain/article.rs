use super::NormalizedTitleKey;

pub const UNKNOWN_SOURCE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub url: String,
    /// ISO-8601 when the upstream provides it; never validated
    pub published_at: String,
    pub content: String,
    pub summary: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: UNKNOWN_SOURCE.to_string(),
            url: String::new(),
            published_at: String::new(),
            content: String::new(),
            summary: None,
        }
    }

    pub fn title_key(&self) -> NormalizedTitleKey {
        NormalizedTitleKey::from_title(&self.title)
    }

    /// Whether the digest service should ask for a summary
    pub fn needs_summary(&self) -> bool {
        self.summary.is_none() && !self.content.trim().is_empty()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        if !source.trim().is_empty() {
            self.source = source;
        }
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_published(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
