use crate::errors::DigestResult;

/// An external, possibly unavailable, abstractive summarizer
#[cfg_attr(test, mockall::automock)]
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> DigestResult<String>;
}
