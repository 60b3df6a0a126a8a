use thiserror::Error;

use crate::domain::SourceKind;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Source errors
    #[error("Source {source_kind} failed: {message}")]
    SourceFetch {
        source_kind: SourceKind,
        message: String,
    },

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Summarization errors
    #[error("Summarization failed: {0}")]
    Summarization(String),

    // Delivery errors
    #[error("Delivery failed: {0}")]
    Delivery(String),

    // Mail errors from mailer library
    #[error("Mail error: {0}")]
    Mail(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<mailer::MailError> for DigestError {
    fn from(err: mailer::MailError) -> Self {
        DigestError::Mail(err.to_string())
    }
}

impl DigestError {
    pub fn source_fetch(source_kind: SourceKind, message: impl Into<String>) -> Self {
        DigestError::SourceFetch {
            source_kind,
            message: message.into(),
        }
    }
}

pub type DigestResult<T> = Result<T, DigestError>;
