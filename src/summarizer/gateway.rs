use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::DigestResult;
use crate::summarizer::extractive::{ExtractiveSummarizer, SHORT_TEXT_THRESHOLD};
use crate::summarizer::huggingface::HuggingFaceSummarizer;
use crate::summarizer::traits::Summarizer;

/// Front door for summarization: external model when configured, local
/// extractive fallback otherwise or whenever the model fails.
pub struct SummarizationGateway {
    external: Option<Box<dyn Summarizer>>,
    fallback: ExtractiveSummarizer,
}

impl SummarizationGateway {
    pub fn new(external: Option<Box<dyn Summarizer>>) -> Self {
        Self {
            external,
            fallback: ExtractiveSummarizer::new(),
        }
    }

    /// Gateway with only the local fallback
    pub fn local() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &Config) -> DigestResult<Self> {
        let external: Option<Box<dyn Summarizer>> = match &config.huggingface_api_key {
            Some(key) => Some(Box::new(HuggingFaceSummarizer::new(
                config.summarizer_url.clone(),
                key.clone(),
                config.http_timeout,
            )?)),
            None => {
                debug!("HUGGINGFACE_API_KEY not set, using extractive summaries only");
                None
            }
        };

        Ok(Self::new(external))
    }

    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    pub fn summarize(&self, content: &str) -> String {
        if content.chars().count() < SHORT_TEXT_THRESHOLD {
            return content.to_string();
        }

        if let Some(external) = &self.external {
            match external.summarize(content) {
                Ok(summary) => return summary,
                Err(e) => warn!(error = %e, "External summarizer failed, using extractive fallback"),
            }
        }

        self.fallback.summarize(content)
    }
}
