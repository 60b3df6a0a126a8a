pub mod traits;
pub mod extractive;
pub mod huggingface;
pub mod gateway;

pub use traits::Summarizer;
pub use extractive::ExtractiveSummarizer;
pub use huggingface::HuggingFaceSummarizer;
pub use gateway::SummarizationGateway;
