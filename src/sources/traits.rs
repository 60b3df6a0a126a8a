use crate::domain::{Article, SourceKind};
use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait NewsSource: Send + Sync {
    /// Identifies this source in logs and listings
    fn kind(&self) -> SourceKind;

    /// Fetch at most `limit` candidate articles for `query`, in the
    /// source's own order (newest first where the upstream dates entries)
    fn fetch(&self, query: &str, limit: usize) -> DigestResult<Vec<Article>>;
}
