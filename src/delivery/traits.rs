use crate::domain::Article;
use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait DigestSink: Send + Sync {
    /// Compose and transmit the finished digest to `recipient`
    fn deliver(&self, recipient: &str, articles: &[Article]) -> DigestResult<()>;
}
