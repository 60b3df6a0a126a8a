pub mod article;
pub mod message;
pub mod query;
pub mod response;
pub mod source;
pub mod title_key;

pub use article::{Article, UNKNOWN_SOURCE};
pub use message::{DigestEntry, DigestMessage};
pub use query::{DigestQuery, DigestRequest, DEFAULT_NUM_ARTICLES, MAX_NUM_ARTICLES};
pub use response::{ArticleBrief, DigestResponse};
pub use source::SourceKind;
pub use title_key::NormalizedTitleKey;
