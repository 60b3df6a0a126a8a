use serde::{Deserialize, Serialize};

use crate::errors::{DigestError, DigestResult};

pub const DEFAULT_NUM_ARTICLES: usize = 5;
pub const MAX_NUM_ARTICLES: usize = 50;

/// Inbound digest request as received over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestRequest {
    pub query: String,
    pub email: String,
    #[serde(default = "default_num_articles")]
    pub num_articles: usize,
}

fn default_num_articles() -> usize {
    DEFAULT_NUM_ARTICLES
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestQuery {
    pub query: String,
    pub num_articles: usize,
    pub recipient: String,
}

impl DigestQuery {
    pub fn new(
        query: impl Into<String>,
        num_articles: usize,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            num_articles,
            recipient: recipient.into(),
        }
    }

    /// Check the search half of the query (topic and count)
    pub fn validate_search(&self) -> DigestResult<()> {
        if self.query.trim().is_empty() {
            return Err(DigestError::InvalidInput("query must not be empty".to_string()));
        }

        if self.num_articles == 0 || self.num_articles > MAX_NUM_ARTICLES {
            return Err(DigestError::InvalidInput(format!(
                "num_articles must be between 1 and {}, got {}",
                MAX_NUM_ARTICLES, self.num_articles
            )));
        }

        Ok(())
    }

    /// Full validation, including the delivery address
    pub fn validate(&self) -> DigestResult<()> {
        self.validate_search()?;

        let recipient = self.recipient.trim();
        if recipient.is_empty() || !recipient.contains('@') {
            return Err(DigestError::InvalidInput(format!(
                "recipient {:?} is not an email address",
                self.recipient
            )));
        }

        Ok(())
    }
}

impl From<DigestRequest> for DigestQuery {
    fn from(request: DigestRequest) -> Self {
        Self::new(request.query, request.num_articles, request.email)
    }
}
