pub mod aggregator;
pub mod digest_service;

pub use aggregator::NewsAggregator;
pub use digest_service::DigestService;
